//! ResourceArc Wrappers
//!
//! Persistent scanner state handed to the BEAM. One resource guards one
//! cursor; forks get their own resource over the same shared bytes.

use crate::buffer::HtmlBuffer;
use rustler::ResourceArc;
use std::sync::Mutex;

/// Wrapper for HtmlBuffer that can be stored in a ResourceArc
pub struct HtmlBufferResource {
    pub inner: Mutex<HtmlBuffer>,
}

impl HtmlBufferResource {
    pub fn new(input: Vec<u8>) -> Self {
        Self::from_buffer(HtmlBuffer::new(input))
    }

    pub fn from_buffer(buffer: HtmlBuffer) -> Self {
        HtmlBufferResource {
            inner: Mutex::new(buffer),
        }
    }

    /// Run `f` against the scanner state.
    ///
    /// # Errors
    ///
    /// Returns `"mutex_poisoned"` if the scanner mutex is poisoned.
    pub fn with_buffer<F, R>(&self, f: F) -> Result<R, &'static str>
    where
        F: FnOnce(&HtmlBuffer) -> R,
    {
        let guard = self.inner.lock().map_err(|_| "mutex_poisoned")?;
        Ok(f(&guard))
    }

    /// Run `f` against the scanner state, allowing it to move the cursor.
    ///
    /// # Errors
    ///
    /// Returns `"mutex_poisoned"` if the scanner mutex is poisoned.
    pub fn with_buffer_mut<F, R>(&self, f: F) -> Result<R, &'static str>
    where
        F: FnOnce(&mut HtmlBuffer) -> R,
    {
        let mut guard = self.inner.lock().map_err(|_| "mutex_poisoned")?;
        Ok(f(&mut guard))
    }
}

#[rustler::resource_impl]
impl rustler::Resource for HtmlBufferResource {}

/// Type alias for the ResourceArc
pub type HtmlBufferRef = ResourceArc<HtmlBufferResource>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_buffer_mut_moves_cursor() {
        let resource = HtmlBufferResource::new(b"<p>a</p>".to_vec());
        assert_eq!(resource.with_buffer_mut(|b| b.seek_to_tag("p")), Ok(true));
        assert_eq!(resource.with_buffer(HtmlBuffer::position), Ok(3));
    }

    #[test]
    fn test_poisoned_lock_reports_error() {
        let resource = HtmlBufferResource::new(b"<p>a</p>".to_vec());
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = resource.inner.lock();
            panic!("poison");
        }));
        assert_eq!(resource.with_buffer(HtmlBuffer::position), Err("mutex_poisoned"));
    }
}
