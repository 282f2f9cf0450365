use crate::{
    models::{MovieDetail, MovieSummary, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// List top rated movies, one page at a time.
    ///
    /// GET /movie/top_rated
    pub async fn top_rated(&self, page: i64) -> crate::Result<PaginatedResponse<MovieSummary>> {
        let url = self.url("/movie/top_rated")?;
        let api_key = self.api_key();
        let page = page.to_string();

        let response = self
            .client()
            .get(url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    pub async fn movie_detail(&self, movie_id: i64) -> crate::Result<MovieDetail> {
        let url = self.url(&format!("/movie/{}", movie_id))?;
        let api_key = self.api_key();

        let response = self
            .client()
            .get(url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
