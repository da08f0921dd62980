//! Command-line interface for tsk
//!
//! One invocation runs any combination of the four operations against a
//! single selected backend, always in the order add, delete, done, list.
//! A failed operation is reported on stderr and the remaining operations
//! still run; the process exit code is the first failure's.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::config::Config;
use crate::display::TableDisplay;
use crate::error::{exit_codes, Error, Result};
use crate::service::TaskService;
use crate::storage::{self, Backend};
use crate::task::TaskId;

/// tsk - terminal task list
///
/// Add, complete, delete, and list short text tasks, kept in memory for a
/// single run or in a local JSON file.
#[derive(Parser, Debug)]
#[command(name = "tsk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Add a new task
    #[arg(long, value_name = "TEXT")]
    pub add: Option<String>,

    /// List all tasks
    #[arg(long)]
    pub list: bool,

    /// Remove a task by ID
    #[arg(long, value_name = "ID")]
    pub delete: Option<TaskId>,

    /// Mark a task as done by ID
    #[arg(long, value_name = "ID")]
    pub done: Option<TaskId>,

    /// Storage backend: slice or file
    #[arg(long, value_name = "BACKEND")]
    pub storage: Option<String>,

    /// Database file for the file backend
    #[arg(long, value_name = "PATH", env = "TSK_DB")]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Execute the invocation and return the process exit code.
    pub fn run(self) -> i32 {
        match self.execute() {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err}");
                if matches!(err, Error::NoCommand) {
                    let mut command = Cli::command();
                    let _ = command.print_help();
                }
                err.exit_code()
            }
        }
    }

    fn execute(&self) -> Result<i32> {
        if self.add.is_none() && self.delete.is_none() && self.done.is_none() && !self.list {
            return Err(Error::NoCommand);
        }

        let config = Config::load_from_dir(Path::new("."))?;
        let backend: Backend = self
            .storage
            .as_deref()
            .unwrap_or(&config.storage.backend)
            .parse()?;
        let db_path = self.db.clone().unwrap_or_else(|| config.storage.file.clone());

        let storage = storage::open(backend, db_path);
        let mut service = TaskService::new(storage, Box::new(TableDisplay));

        let mut exit_code = exit_codes::SUCCESS;

        if let Some(description) = &self.add {
            if let Err(err) = service.add_task(description) {
                report(&mut exit_code, err);
            }
        }
        if let Some(id) = self.delete {
            if let Err(err) = service.delete_task(id) {
                report(&mut exit_code, err);
            }
        }
        if let Some(id) = self.done {
            if let Err(err) = service.complete_task(id) {
                report(&mut exit_code, err);
            }
        }
        if self.list {
            if let Err(err) = service.list_tasks() {
                report(&mut exit_code, err);
            }
        }

        Ok(exit_code)
    }
}

fn report(exit_code: &mut i32, err: Error) {
    eprintln!("Error: {err}");
    if *exit_code == exit_codes::SUCCESS {
        *exit_code = err.exit_code();
    }
}
