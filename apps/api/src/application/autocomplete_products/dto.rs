use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct AutocompleteRequest {
    #[validate(length(min = 1))]
    pub query: String,
}

impl AutocompleteRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
        }
    }
}
