//! Spendlog is a small web app for tracking personal income and expenses.
//!
//! This library provides a JSON REST API over a flat-file store of
//! transactions, plus routing for the static front-end that consumes it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod endpoints;
mod routing;
mod state;
mod stores;
mod summary;
mod transaction;

pub use routing::build_router;
pub use state::AppState;
pub use stores::{JsonFileStore, MemoryTransactionStore, TransactionStore};
pub use summary::{Summary, compute_summary};
pub use transaction::Transaction;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction file could not be read or written.
    #[error("could not access the transaction file: {0}")]
    Io(String),

    /// The transaction file exists but does not contain a valid transaction array.
    #[error("could not parse the transaction file: {0}")]
    InvalidData(String),

    /// A stored transaction record lacks a field the summary computation needs.
    #[error("transaction record is missing the \"{0}\" field")]
    MissingField(&'static str),

    /// A stored transaction record has an `amount` that is not a number.
    #[error("the \"amount\" field is not a number: {0}")]
    NonNumericAmount(String),

    /// The server-assigned creation date could not be formatted.
    #[error("could not format the transaction date: {0}")]
    DateFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidData(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // None of these errors are intended to be shown to the client.
        tracing::error!("An unexpected error occurred: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
