use std::future::Future;

use super::types::Media;

/// Looks a post up by its shortcode and returns it fully decoded.
pub trait FetchMedia {
    type Error;

    fn fetch_media_by_code(&self, code: &str) -> impl Future<Output = Result<Media, Self::Error>>;
}

impl Media {
    /// Re-fetches this post by its code and replaces the whole record with the
    /// result.
    ///
    /// On error the record is left as it was and the fetcher's error is
    /// returned unchanged. The replacement is a single move, so readers that
    /// share the record across tasks should hold it behind their own lock.
    pub async fn refresh<F>(&mut self, fetcher: &F) -> Result<(), F::Error>
    where
        F: FetchMedia,
    {
        let fresh = fetcher.fetch_media_by_code(&self.code).await?;
        *self = fresh;
        Ok(())
    }
}
