//! End-to-end tests for the `bindshift` binary
//!
//! Each test builds a throwaway project and runs the real executable, using
//! small shell commands as the deploy step.
#![cfg(unix)]

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{bound_component, broken_component, plain_component, Project};
use pretty_assertions::assert_eq;

fn bindshift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bindshift"))
        .args(args)
        .output()
        .expect("failed to run bindshift")
}

fn deploy(project: &Project, command: &[&str]) -> Output {
    let root = project.root().to_string_lossy().to_string();
    let mut args = vec!["deploy", "--project", root.as_str(), "--"];
    args.extend_from_slice(command);
    bindshift(&args)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_transform_check_exit_codes() {
    let project = Project::new();
    let bound = project.add_component("bound", &bound_component("Bound"));
    let plain = project.add_component("plain", &plain_component("Plain"));

    let out = bindshift(&["transform", "--check", &path_str(&project.script_path(&bound))]);
    assert_eq!(out.status.code(), Some(1));

    let out = bindshift(&["transform", "--check", &path_str(&project.script_path(&plain))]);
    assert_eq!(out.status.code(), Some(0));

    // --check never writes
    assert_eq!(project.read(&bound), bound_component("Bound"));
}

#[test]
fn test_transform_write_rewrites_in_place() {
    let project = Project::new();
    let bound = project.add_component("bound", &bound_component("Bound"));
    let path = path_str(&project.script_path(&bound));

    let out = bindshift(&["transform", "--write", &path]);
    assert!(out.status.success());
    assert!(project
        .read(&bound)
        .contains("count = bind(this, \"count\").to(counter);"));

    let out = bindshift(&["transform", "--check", &path]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_transform_prints_json_result() {
    let project = Project::new();
    let bound = project.add_component("bound", &bound_component("Bound"));

    let out = bindshift(&[
        "transform",
        "--format",
        "json",
        &path_str(&project.script_path(&bound)),
    ]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["modified"], true);
    assert_eq!(json["metadata"]["occurrences"], 1);
}

#[test]
fn test_scan_reports_each_component() {
    let project = Project::new();
    project.add_component("alpha", &bound_component("Alpha"));
    project.add_component("plain", &plain_component("Plain"));

    let root = path_str(project.root());
    let out = bindshift(&["scan", "--project", &root]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("rewrite") && lines[0].contains("alpha.js"));
    assert!(lines[1].starts_with("clean") && lines[1].contains("plain.js"));
}

#[test]
fn test_scan_fails_on_broken_component() {
    let project = Project::new();
    project.add_component("broken", &broken_component("Broken"));

    let out = bindshift(&["scan", "--project", &path_str(project.root())]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("error"));
}

#[test]
fn test_deploy_runs_command_on_rewritten_files_then_restores() {
    let project = Project::new();
    let alpha = project.add_component("alpha", &bound_component("Alpha"));
    let script = path_str(&project.script_path(&alpha));

    // The command only succeeds if it sees the rewritten source
    let check = format!("grep -q 'bind(this, \"count\")' '{script}'");
    let out = deploy(&project, &["sh", "-c", &check]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(project.read(&alpha), bound_component("Alpha"));
}

#[test]
fn test_deploy_exits_with_command_status() {
    let project = Project::new();
    let alpha = project.add_component("alpha", &bound_component("Alpha"));

    let out = deploy(&project, &["sh", "-c", "exit 3"]);
    assert_eq!(out.status.code(), Some(3));
    // Restore still ran after the failing command
    assert_eq!(project.read(&alpha), bound_component("Alpha"));

    let out = deploy(&project, &["false"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(project.read(&alpha), bound_component("Alpha"));
}

#[test]
fn test_failed_pre_deploy_restores_and_skips_command() {
    let project = Project::new();
    let alpha = project.add_component("alpha", &bound_component("Alpha"));
    let broken = project.add_component("broken", &broken_component("Broken"));
    let marker = project.root().join("deployed");

    let touch = format!("touch '{}'", path_str(&marker));
    let out = deploy(&project, &["sh", "-c", &touch]);

    assert!(!out.status.success());
    assert!(!marker.exists());
    assert_eq!(project.read(&alpha), bound_component("Alpha"));
    assert_eq!(project.read(&broken), broken_component("Broken"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("pre-deploy failed"));
}

#[test]
fn test_skip_policy_runs_command_despite_broken_component() {
    let project = Project::new();
    let alpha = project.add_component("alpha", &bound_component("Alpha"));
    project.add_component("broken", &broken_component("Broken"));
    let root = path_str(project.root());

    let out = bindshift(&[
        "deploy",
        "--project",
        &root,
        "--on-error",
        "skip",
        "--",
        "true",
    ]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(project.read(&alpha), bound_component("Alpha"));
}

#[test]
fn test_partial_restore_exits_non_zero() {
    let project = Project::new();
    let alpha = project.add_component("alpha", &bound_component("Alpha"));
    let beta = project.add_component("beta", &bound_component("Beta"));

    // The deploy step removes beta's bundle, so writing it back fails
    let remove = format!("rm -rf '{}'", path_str(&beta.content_directory));
    let out = deploy(&project, &["sh", "-c", &remove]);

    assert!(!out.status.success());
    assert_eq!(project.read(&alpha), bound_component("Alpha"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to restore"));
    assert!(stderr.contains("restored 1 of 2 files"));
}
