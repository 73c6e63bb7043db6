use serde::{Deserialize, Serialize};

use crate::domain::Brief;

pub const BRIEF_PATH: &str = "api/brief";
pub const ARTICLE_PATH: &str = "api/article";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefRequest {
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub keyword: String,
    pub brief: Brief,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: String,
}
