use std::path::PathBuf;

use courier_core::config::AppConfig;
use courier_core::mail::OutgoingMail;
use courier_core::Locale;
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::common::{normalize_key, resolve_db_path};
use crate::commands::completions::render_completions;
use crate::commands::locale::describe_locale;
use crate::commands::mail::{preview_reset_mail, render_mail_preview};
use crate::commands::paginate::{page_items, PageOutput};
use crate::commands::prop::{format_property_lines, list_properties, run_remove, run_set, PropertyItem};
use crate::commands::session::run_sign_out;
use crate::error::CliError;

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn explicit_db_path_wins() {
    let path = PathBuf::from("/tmp/courier-test.db");
    assert_eq!(resolve_db_path(Some(path.clone())).unwrap(), path);
}

#[test]
fn normalize_key_trims_and_rejects_empty() {
    assert_eq!(normalize_key("  locale ").unwrap(), "locale");
    assert!(matches!(normalize_key("   "), Err(CliError::EmptyKey)));
}

#[test]
fn page_items_reports_progress() {
    let source = items(&["a", "b", "c", "d", "e"]);

    assert_eq!(
        page_items(&source, 2, 2).unwrap(),
        PageOutput {
            items: items(&["c", "d"]),
            next_offset: 4,
            total: 5,
            has_more: true,
        }
    );

    let last = page_items(&source, 2, 4).unwrap();
    assert_eq!(last.items, items(&["e"]));
    assert!(!last.has_more);
}

#[test]
fn page_items_rejects_offset_past_end() {
    let source = items(&["a"]);
    assert!(matches!(
        page_items(&source, 2, 3),
        Err(CliError::Core(courier_core::Error::IndexOutOfRange { .. }))
    ));
}

#[test]
fn page_items_on_empty_input() {
    let output = page_items(&[], 3, 0).unwrap();
    assert!(output.items.is_empty());
    assert_eq!(output.next_offset, 0);
    assert!(!output.has_more);
}

#[test]
fn property_lines_hide_password() {
    let lines = format_property_lines(&[
        PropertyItem {
            key: "password".to_string(),
            value: "hunter2".to_string(),
        },
        PropertyItem {
            key: "username".to_string(),
            value: "sam".to_string(),
        },
    ]);
    assert_eq!(lines, vec!["password = ********", "username = sam"]);
    assert_eq!(format_property_lines(&[]), vec!["No properties stored."]);
}

#[test]
fn describe_locale_includes_direction() {
    assert_eq!(describe_locale(Locale::Ar), "ar (right-to-left)");
    assert_eq!(describe_locale(Locale::En), "en (left-to-right)");
}

#[test]
fn mail_preview_lists_headers_then_body() {
    let preview = render_mail_preview(&OutgoingMail {
        from: "noreply@example.com".to_string(),
        to: "sam@example.com".to_string(),
        subject: "Reset your password".to_string(),
        body: "Your verification code is: 123456".to_string(),
    });
    assert!(preview.starts_with("From: noreply@example.com\nTo: sam@example.com\n"));
    assert!(preview.ends_with("\n\nYour verification code is: 123456"));
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("courier"));
}

#[tokio::test(flavor = "multi_thread")]
async fn prop_commands_roundtrip_and_sign_out() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("courier.db");

    run_set("username", "sam", &db_path).await.unwrap();
    run_set("id", "42", &db_path).await.unwrap();
    run_set("locale", "ar", &db_path).await.unwrap();
    run_remove("username", &db_path).await.unwrap();

    let keys: Vec<_> = list_properties(&db_path)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.key)
        .collect();
    assert_eq!(keys, vec!["id", "locale"]);

    run_sign_out(&db_path).await.unwrap();
    assert_eq!(
        list_properties(&db_path).await.unwrap(),
        vec![PropertyItem {
            key: "locale".to_string(),
            value: "ar".to_string(),
        }]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn reset_dry_run_leaves_store_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("courier.db");

    let mail = preview_reset_mail(" sam@example.com ", "123456", &AppConfig::default(), &db_path)
        .await
        .unwrap();

    assert_eq!(mail.to, "sam@example.com");
    assert_eq!(mail.from, "noreply@localhost");
    assert!(mail.body.ends_with("123456"));
    assert!(list_properties(&db_path).await.unwrap().is_empty());
}

#[test]
fn completions_render_for_every_shell() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        assert!(!render_completions(shell).is_empty());
    }
}
