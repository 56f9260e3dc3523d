use clap::Parser;

use std::net::{IpAddr, SocketAddr};

#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[clap(version, about = "Decode CoTA entries from transaction witnesses over JSON-RPC")]
pub struct Args {
    /// Address to listen on
    #[clap(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[clap(long, env = "PORT", default_value_t = 9000)]
    pub port: u16,

    /// Number of http server threads
    #[clap(long, default_value_t = 4)]
    pub threads: usize,
}

impl Args {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["cota-entries-parser"]).unwrap();
        assert_eq!(args.threads, 4);
        assert_eq!(args.host, IpAddr::from([0, 0, 0, 0]));
    }

    #[test]
    fn test_bind_addr() {
        let args =
            Args::try_parse_from(["cota-entries-parser", "--host", "127.0.0.1", "--port", "8118"])
                .unwrap();
        assert_eq!(args.bind_addr(), "127.0.0.1:8118".parse().unwrap());
    }

    #[test]
    fn test_invalid_port() {
        assert!(Args::try_parse_from(["cota-entries-parser", "--port", "70000"]).is_err());
    }
}
