use crate::{
    models::{MovieSummary, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Search for movies by title.
    ///
    /// GET /search/movie. The query text is URL-escaped by the client's
    /// query serializer.
    pub async fn search_movies(
        &self,
        query: &str,
        page: i64,
    ) -> crate::Result<PaginatedResponse<MovieSummary>> {
        let url = self.url("/search/movie")?;
        let api_key = self.api_key();
        let page = page.to_string();

        let response = self
            .client()
            .get(url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("query", query),
                ("page", page.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
