//! Navigation actor.
//!
//! # Responsibilities
//! - Own the navigation controller on a single task
//! - Apply shell commands one at a time, in arrival order
//! - Reply with whatever the command rendered
//! - Save business data when the last handle goes away
//!
//! # Design Decisions
//! - All state changes go through one mpsc channel, so at most one
//!   navigation is ever in flight
//! - Each request carries a oneshot for its reply

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use thiserror::Error;

use crate::navigation::{Location, MemoryLocation, NavBar, NavigationController, Outcome};
use crate::shell::command::{Command, HELP};
use crate::shell::loader::ConsolePageLoader;

/// The controller as hosted by the shell.
pub type ShellController = NavigationController<MemoryLocation, ConsolePageLoader, NavBar>;

/// Result of applying a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to show the user.
    pub lines: Vec<String>,
    /// Set for commands that ran the route handler.
    pub outcome: Option<Outcome>,
    /// The shell should exit.
    pub quit: bool,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("navigation actor has stopped")]
    Closed,
}

struct Request {
    command: Command,
    reply: oneshot::Sender<Reply>,
}

/// Cloneable handle for sending commands to the actor.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    tx: mpsc::Sender<Request>,
}

impl ShellHandle {
    /// Send a command and wait for its reply.
    pub async fn send(&self, command: Command) -> Result<Reply, ShellError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request { command, reply })
            .await
            .map_err(|_| ShellError::Closed)?;
        rx.await.map_err(|_| ShellError::Closed)
    }
}

/// Spawn the actor. It runs until every handle is dropped, then saves data.
pub fn spawn(controller: ShellController, capacity: usize) -> (ShellHandle, JoinHandle<ShellController>) {
    let (tx, mut rx) = mpsc::channel::<Request>(capacity.max(1));

    let task = tokio::spawn(async move {
        let mut controller = controller;
        while let Some(Request { command, reply }) = rx.recv().await {
            let result = apply(&mut controller, command);
            if reply.send(result).is_err() {
                tracing::debug!("Command sender went away before the reply");
            }
        }

        if let Err(e) = controller.loader().data().save() {
            tracing::error!(error = %e, "Failed to save data on shutdown");
        }
        tracing::info!("Navigation actor stopped");
        controller
    });

    (ShellHandle { tx }, task)
}

/// Apply one command to the controller.
pub fn apply(controller: &mut ShellController, command: Command) -> Reply {
    let mut reply = Reply::default();

    match command {
        Command::Go(route) => {
            reply.outcome = Some(controller.navigate(&route));
        }
        Command::Hash(fragment) => {
            controller.location_mut().set_hash(&fragment);
            reply.outcome = Some(controller.handle_route_change());
        }
        Command::Login => {
            controller.set_authenticated(true);
            reply.lines.push("وارد شدید".to_string());
        }
        Command::Logout => {
            controller.set_authenticated(false);
            reply.lines.push("خارج شدید".to_string());
        }
        Command::Where => {
            let active: Vec<&str> = controller
                .highlighter()
                .active_pages()
                .iter()
                .map(|page| page.as_str())
                .collect();
            reply.lines.push(format!(
                "route={} page={} authenticated={} active=[{}]",
                controller.current_route(),
                controller.current_page(),
                controller.is_authenticated(),
                active.join(",")
            ));
        }
        Command::Help => reply.lines.extend(HELP.lines().map(str::to_string)),
        Command::Quit => reply.quit = true,
    }

    if let Some(Outcome::RedirectLimit { page }) = reply.outcome {
        reply.lines.push(format!("redirect limit reached while loading {page}"));
    }
    reply.lines.extend(controller.loader_mut().take_output());
    reply
}
