use std::path::Path;

use tokio::sync::{mpsc, oneshot};

use pokedex_core::error::StoreError;
use pokedex_core::models::BookmarkEntry;
use pokedex_core::storage::Storage;

/// Cloneable handle to the database actor.
///
/// The SQLite connection lives on a dedicated thread; every call is sent
/// there as a command and answered over a oneshot channel, so async
/// callers never block on disk I/O.
#[derive(Clone)]
pub struct DbHandle {
    tx: mpsc::UnboundedSender<DbCommand>,
}

enum DbCommand {
    ListBookmarks {
        reply: oneshot::Sender<Result<Vec<BookmarkEntry>, StoreError>>,
    },
    AddBookmark {
        name: String,
        reply: oneshot::Sender<Result<bool, StoreError>>,
    },
    RemoveBookmark {
        name: String,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
}

impl DbHandle {
    /// Open the database file and start the actor thread.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let storage = Storage::open(path).inspect_err(|e| {
            tracing::error!(path = %path.display(), "Failed to open database: {e}");
        })?;
        Self::spawn(storage)
    }

    /// In-memory database (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        Self::spawn(Storage::open_memory()?)
    }

    fn spawn(storage: Storage) -> Result<Self, StoreError> {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("db-actor".into())
            .spawn(move || actor_loop(storage, rx))
            .map_err(|e| {
                tracing::error!("Failed to spawn DB thread: {e}");
                StoreError::Unavailable(e.to_string())
            })?;

        Ok(Self { tx })
    }

    pub async fn list_bookmarks(&self) -> Result<Vec<BookmarkEntry>, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.send(DbCommand::ListBookmarks { reply })?;
        rx.await.unwrap_or_else(|_| Err(actor_closed()))
    }

    /// Returns `true` when a new row was written.
    pub async fn add_bookmark(&self, name: impl Into<String>) -> Result<bool, StoreError> {
        let (reply, rx) = oneshot::channel();
        self.send(DbCommand::AddBookmark {
            name: name.into(),
            reply,
        })?;
        rx.await.unwrap_or_else(|_| Err(actor_closed()))
    }

    pub async fn remove_bookmark(&self, name: impl Into<String>) -> Result<(), StoreError> {
        let (reply, rx) = oneshot::channel();
        self.send(DbCommand::RemoveBookmark {
            name: name.into(),
            reply,
        })?;
        rx.await.unwrap_or_else(|_| Err(actor_closed()))
    }

    fn send(&self, cmd: DbCommand) -> Result<(), StoreError> {
        self.tx.send(cmd).map_err(|_| actor_closed())
    }
}

fn actor_closed() -> StoreError {
    StoreError::Unavailable("DB actor closed".into())
}

fn actor_loop(storage: Storage, mut rx: mpsc::UnboundedReceiver<DbCommand>) {
    while let Some(cmd) = rx.blocking_recv() {
        match cmd {
            DbCommand::ListBookmarks { reply } => {
                let _ = reply.send(storage.list_bookmarks());
            }
            DbCommand::AddBookmark { name, reply } => {
                let _ = reply.send(storage.add_bookmark(&name));
            }
            DbCommand::RemoveBookmark { name, reply } => {
                let _ = reply.send(storage.remove_bookmark(&name));
            }
        }
    }
    tracing::debug!("DB actor stopped");
}
