use std::sync::mpsc::{Receiver, Sender};

use crate::engine::backend_client::BackendClient;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Background worker owning the HTTP round trips. Commands are handled
/// strictly in order, so when two submits race the later reply is the
/// last one drained by the UI and wins.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    client: BackendClient,
}

impl Engine {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>) -> Self {
        Self {
            rx,
            tx,
            client: BackendClient::from_env(),
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::GenerateBook(request) => {
                    match self.client.generate_book(&request) {
                        Ok(story) => {
                            let _ = self.tx.send(EngineResponse::StoryLoaded(story));
                        }
                        // Transport failures and malformed replies land
                        // here; the view keeps its previous contents.
                        Err(err) => log::error!("generate-book request failed: {err:#}"),
                    }
                }

                EngineCommand::TestConnection => match self.client.test_connection() {
                    Ok(msg) => {
                        let _ = self.tx.send(EngineResponse::ConnectionStatus(msg));
                    }
                    Err(err) => {
                        log::error!("connection probe failed: {err:#}");
                        let _ = self
                            .tx
                            .send(EngineResponse::ConnectionStatus(String::new()));
                    }
                },
            }
        }
    }
}
