use tmdb::{MovieSummary, PaginatedResponse};

/// One fetched result page, as consumed by the screen coordinators.
///
/// Ephemeral: applied to the coordinator state and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    /// Movies in backend ranking order.
    pub movies: Vec<MovieSummary>,
    /// Total page count reported for the query.
    pub total_pages: i64,
}

impl From<PaginatedResponse<MovieSummary>> for MoviePage {
    fn from(response: PaginatedResponse<MovieSummary>) -> Self {
        Self {
            movies: response.results,
            total_pages: response.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keeps_result_order() {
        let response: PaginatedResponse<MovieSummary> = serde_json::from_str(
            r#"{
                "page": 2,
                "results": [
                    {"id": 3, "title": "C", "original_title": "C", "overview": "",
                     "poster_path": null, "backdrop_path": null, "release_date": null,
                     "vote_average": 1.0, "vote_count": 1, "popularity": 1.0,
                     "genre_ids": [], "original_language": "en"},
                    {"id": 1, "title": "A", "original_title": "A", "overview": "",
                     "poster_path": null, "backdrop_path": null, "release_date": null,
                     "vote_average": 1.0, "vote_count": 1, "popularity": 1.0,
                     "genre_ids": [], "original_language": "en"}
                ],
                "total_pages": 7,
                "total_results": 130
            }"#,
        )
        .unwrap();

        let page = MoviePage::from(response);
        assert_eq!(page.total_pages, 7);
        let ids: Vec<i64> = page.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
