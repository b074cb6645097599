//! Command flows against a file store in a temporary directory.

use std::fs;
use std::path::Path;

use ring_cli::cli::{
    AreaCommand, AreaTarget, ClassCommand, EditorLogin, ImportArgs, JumpArgs, LoginArgs,
    RegisterArgs,
};
use ring_cli::commands::{
    Workspace, error_message, run_area, run_board, run_class, run_import, run_jump, run_next,
    run_register,
};
use ring_cli::config::Settings;
use ring_model::Show;
use ring_persistence::{DEFAULT_SHOW_KEY, load_snapshot};
use tempfile::tempdir;

fn login() -> LoginArgs {
    LoginArgs {
        user: "steward".to_string(),
        password: "pw".to_string(),
    }
}

fn editor() -> EditorLogin {
    EditorLogin {
        login: login(),
        master_key: "emily".to_string(),
    }
}

fn workspace(dir: &Path) -> Workspace {
    let workspace = Workspace::with_settings(Settings::default(), Some(dir));
    run_register(
        &workspace,
        &RegisterArgs {
            username: "steward".to_string(),
            password: "pw".to_string(),
        },
    )
    .unwrap();
    workspace
}

fn stored_show(workspace: &Workspace) -> Show {
    let snapshot = load_snapshot(workspace.store(), DEFAULT_SHOW_KEY)
        .unwrap()
        .expect("show saved");
    Show::from_snapshot(snapshot)
}

fn import(workspace: &Workspace, dir: &Path, text: &str) {
    let path = dir.join("classes.txt");
    fs::write(&path, text).unwrap();
    run_import(
        workspace,
        &ImportArgs {
            editor: editor(),
            input: path,
        },
    )
    .unwrap();
}

#[test]
fn register_twice_fails() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    let again = run_register(
        &workspace,
        &RegisterArgs {
            username: "steward".to_string(),
            password: "other".to_string(),
        },
    );
    assert!(again.is_err());
    assert!(dir.path().join("horseShowUsers.json").exists());
}

#[test]
fn import_and_navigate_persist_between_commands() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    import(
        &workspace,
        dir.path(),
        "[Main Ring]\nLead Line Walk/Trot\nBeginner Equitation\n\n[Ring 2]\nHunter Pleasure\n",
    );

    let target = AreaTarget {
        editor: editor(),
        area: "Main Ring".to_string(),
    };
    run_next(&workspace, &target).unwrap();
    assert!(run_next(&workspace, &target).is_err());

    let show = stored_show(&workspace);
    assert_eq!(
        show.area("Main Ring").unwrap().now_running(),
        Some("Beginner Equitation")
    );
    assert_eq!(show.area("Ring 2").unwrap().current, 0);

    run_jump(
        &workspace,
        &JumpArgs {
            editor: editor(),
            area: "Main Ring".to_string(),
            position: 0,
        },
    )
    .unwrap();
    assert_eq!(stored_show(&workspace).area("Main Ring").unwrap().current, 0);

    run_board(&workspace, &login()).unwrap();
}

#[test]
fn wrong_master_key_is_rejected() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    import(&workspace, dir.path(), "[A]\nX\nY");

    let mut bad = editor();
    bad.master_key = "guess".to_string();
    let result = run_next(
        &workspace,
        &AreaTarget {
            editor: bad,
            area: "A".to_string(),
        },
    );
    assert!(result.is_err());
    assert_eq!(stored_show(&workspace).area("A").unwrap().current, 0);
}

#[test]
fn unknown_user_cannot_view() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    let result = run_board(
        &workspace,
        &LoginArgs {
            user: "stranger".to_string(),
            password: "pw".to_string(),
        },
    );
    assert!(result.is_err());
}

#[test]
fn removals_need_confirmation() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    import(&workspace, dir.path(), "[A]\nX\nY\n[B]\nZ");

    let unconfirmed = run_area(
        &workspace,
        &AreaCommand::Remove {
            editor: editor(),
            name: "B".to_string(),
            yes: false,
        },
    );
    assert!(unconfirmed.is_err());
    assert!(stored_show(&workspace).contains_area("B"));

    run_area(
        &workspace,
        &AreaCommand::Remove {
            editor: editor(),
            name: "B".to_string(),
            yes: true,
        },
    )
    .unwrap();
    run_class(
        &workspace,
        &ClassCommand::Remove {
            editor: editor(),
            area: "A".to_string(),
            position: 0,
            yes: true,
        },
    )
    .unwrap();
    run_area(
        &workspace,
        &AreaCommand::Rename {
            editor: editor(),
            old_name: "A".to_string(),
            new_name: "Main Ring".to_string(),
        },
    )
    .unwrap();

    let show = stored_show(&workspace);
    assert_eq!(show.area_names().collect::<Vec<_>>(), vec!["Main Ring"]);
    assert_eq!(show.area("Main Ring").unwrap().classes, vec!["Y"]);
}

#[test]
fn corrupt_accounts_file_gets_readable_message() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    fs::write(dir.path().join("horseShowUsers.json"), "not json").unwrap();

    let error = run_board(&workspace, &login()).unwrap_err();
    assert_eq!(
        error_message(&error),
        "The stored data for 'horseShowUsers' could not be read. It may be corrupted."
    );
    assert_eq!(workspace.store().base_dir(), dir.path());
}

#[test]
fn other_failures_keep_their_message() {
    let dir = tempdir().unwrap();
    let workspace = workspace(dir.path());
    let error = run_board(
        &workspace,
        &LoginArgs {
            user: "steward".to_string(),
            password: "wrong".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(error_message(&error), "invalid username or password");
}
