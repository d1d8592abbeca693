use crate::model::book_request::BookRequest;
use crate::model::story::StoryResponse;

pub enum EngineCommand {
    GenerateBook(BookRequest),
    TestConnection,
}

pub enum EngineResponse {
    /// Result of a successful `/generate-book` round trip. `None` means
    /// the backend returned a null story; it still replaces whatever was
    /// on screen.
    StoryLoaded(Option<StoryResponse>),

    /// Message from the connection probe. Empty clears the status line.
    ConnectionStatus(String),
}
