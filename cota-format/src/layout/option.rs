use super::{LayoutResult, View};

/// `option<T>`: an empty slice is `None`, anything else is the inner value unframed.
impl<'r, T: View<'r>> View<'r> for Option<T> {
    const NAME: &'static str = "Option";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        if slice.is_empty() {
            return Ok(None);
        }
        T::from_slice(slice).map(Some)
    }

    fn as_slice(&self) -> &'r [u8] {
        match self {
            Some(inner) => inner.as_slice(),
            None => &[],
        }
    }
}
