use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info_span};

use ring_core::{CredentialRegistry, ManagerError, Session, SharedSecretGate, ShowManager};
use ring_model::Area;
use ring_persistence::{FileStore, PersistenceError};

use crate::cli::{
    AreaCommand, AreaTarget, ClassCommand, ClassesArgs, EditorLogin, ImportArgs, JumpArgs,
    LoginArgs, RegisterArgs,
};
use crate::config::Settings;
use crate::summary::{print_board, print_import_summary, print_position, print_running_order};

/// Resolved settings plus the store they point at.
pub struct Workspace {
    settings: Settings,
    store: FileStore,
}

impl Workspace {
    pub fn open(config: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let settings = Settings::load(config)?;
        Ok(Self::with_settings(settings, data_dir))
    }

    pub fn with_settings(settings: Settings, data_dir: Option<&Path>) -> Self {
        let store = FileStore::new(settings.data_dir(data_dir));
        debug!(data_dir = %store.base_dir().display(), "using data directory");
        Self { settings, store }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    fn registry(&self) -> Result<CredentialRegistry> {
        CredentialRegistry::load(&self.store, &self.settings.storage.users_key)
            .context("load accounts")
    }

    fn viewer(&self, login: &LoginArgs) -> Result<Session> {
        let registry = self.registry()?;
        Ok(Session::login(&registry, &login.user, &login.password)?)
    }

    fn editor(&self, login: &EditorLogin) -> Result<Session> {
        let mut session = self.viewer(&login.login)?;
        let gate = SharedSecretGate::new(self.settings.access.master_key.clone());
        session.elevate(&gate, &login.master_key)?;
        Ok(session)
    }

    fn manager(&self) -> ShowManager<&FileStore> {
        ShowManager::open(&self.store, self.settings.storage.show_key.clone())
    }
}

/// Message shown for a failed command. Storage failures use their
/// user-facing wording; everything else prints the full context chain.
pub fn error_message(error: &anyhow::Error) -> String {
    let storage = error.chain().find_map(|cause| {
        cause
            .downcast_ref::<PersistenceError>()
            .or_else(|| match cause.downcast_ref::<ManagerError>() {
                Some(ManagerError::Persistence(inner)) => Some(inner),
                _ => None,
            })
    });
    match storage {
        Some(inner) => inner.user_message(),
        None => format!("{error:#}"),
    }
}

fn warn_if_unsaved(manager: &ShowManager<&FileStore>) {
    if !manager.is_durable() {
        eprintln!("warning: the change could not be saved and will be lost when this command exits");
    }
}

fn area<'a>(manager: &'a ShowManager<&FileStore>, name: &str) -> Result<&'a Area> {
    manager
        .show()
        .area(name)
        .ok_or_else(|| anyhow!("area not found: {name}"))
}

pub fn run_register(workspace: &Workspace, args: &RegisterArgs) -> Result<()> {
    let key = &workspace.settings.storage.users_key;
    let mut registry = workspace.registry()?;
    registry.register(&args.username, &args.password)?;
    registry
        .save(&workspace.store, key)
        .context("save accounts")?;
    println!("Account '{}' created.", args.username);
    Ok(())
}

pub fn run_board(workspace: &Workspace, login: &LoginArgs) -> Result<()> {
    workspace.viewer(login)?;
    print_board(&workspace.manager().board());
    Ok(())
}

pub fn run_classes(workspace: &Workspace, args: &ClassesArgs) -> Result<()> {
    workspace.viewer(&args.login)?;
    let manager = workspace.manager();
    match &args.area {
        Some(name) => print_running_order(area(&manager, name)?),
        None => manager.show().areas.iter().for_each(print_running_order),
    }
    Ok(())
}

pub fn run_import(workspace: &Workspace, args: &ImportArgs) -> Result<()> {
    let session = workspace.editor(&args.editor)?;
    let span = info_span!("import", user = session.user());
    let _guard = span.enter();
    let text = if args.input == Path::new("-") {
        io::read_to_string(io::stdin()).context("read import text from stdin")?
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("read import file {}", args.input.display()))?
    };
    let mut manager = workspace.manager();
    let summary = manager.import(&session, &text)?;
    print_import_summary(&summary);
    warn_if_unsaved(&manager);
    Ok(())
}

pub fn run_next(workspace: &Workspace, args: &AreaTarget) -> Result<()> {
    let session = workspace.editor(&args.editor)?;
    let mut manager = workspace.manager();
    manager.advance(&session, &args.area)?;
    print_position(area(&manager, &args.area)?);
    warn_if_unsaved(&manager);
    Ok(())
}

pub fn run_prev(workspace: &Workspace, args: &AreaTarget) -> Result<()> {
    let session = workspace.editor(&args.editor)?;
    let mut manager = workspace.manager();
    manager.retreat(&session, &args.area)?;
    print_position(area(&manager, &args.area)?);
    warn_if_unsaved(&manager);
    Ok(())
}

pub fn run_jump(workspace: &Workspace, args: &JumpArgs) -> Result<()> {
    let session = workspace.editor(&args.editor)?;
    let mut manager = workspace.manager();
    manager.jump_to(&session, &args.area, args.position)?;
    print_position(area(&manager, &args.area)?);
    warn_if_unsaved(&manager);
    Ok(())
}

pub fn run_area(workspace: &Workspace, command: &AreaCommand) -> Result<()> {
    match command {
        AreaCommand::Rename {
            editor,
            old_name,
            new_name,
        } => {
            let session = workspace.editor(editor)?;
            let mut manager = workspace.manager();
            manager.rename_area(&session, old_name, new_name)?;
            println!("Renamed '{}' to '{}'.", old_name, new_name.trim());
            warn_if_unsaved(&manager);
        }
        AreaCommand::Remove { editor, name, yes } => {
            let session = workspace.editor(editor)?;
            if !yes {
                bail!("removing {name} deletes all its classes; pass --yes to confirm");
            }
            let mut manager = workspace.manager();
            manager.remove_area(&session, name)?;
            println!("Removed '{name}'.");
            warn_if_unsaved(&manager);
        }
    }
    Ok(())
}

pub fn run_class(workspace: &Workspace, command: &ClassCommand) -> Result<()> {
    match command {
        ClassCommand::Rename {
            editor,
            area: area_name,
            position,
            new_name,
        } => {
            let session = workspace.editor(editor)?;
            let mut manager = workspace.manager();
            manager.rename_class(&session, area_name, *position, new_name)?;
            print_running_order(area(&manager, area_name)?);
            warn_if_unsaved(&manager);
        }
        ClassCommand::Remove {
            editor,
            area: area_name,
            position,
            yes,
        } => {
            let session = workspace.editor(editor)?;
            if !yes {
                bail!("pass --yes to confirm removing this class");
            }
            let mut manager = workspace.manager();
            let removed = manager.remove_class(&session, area_name, *position)?;
            println!("Removed '{removed}' from {area_name}.");
            warn_if_unsaved(&manager);
        }
    }
    Ok(())
}
