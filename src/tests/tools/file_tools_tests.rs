//! Tests for the single-file tools

use std::fs;

use anyhow::Result;

use crate::tests::test_utils::{envelope, fixture, path_str};
use crate::tools::{
    AppendToFileTool, CopyFileTool, DeleteFileTool, MoveFileTool, ReadFileTool, WriteFileTool,
};

#[tokio::test]
async fn test_read_file_returns_content_and_size() -> Result<()> {
    let temp_dir = fixture(&[("hello.txt", "hello\nworld")])?;
    let file_path = path_str(&temp_dir.path().join("hello.txt"));

    let tool = ReadFileTool { file_path: file_path.clone() };
    let body = envelope(&tool.call_tool().await?)?;

    assert_eq!(body["success"], true);
    assert_eq!(body["content"], "hello\nworld");
    assert_eq!(body["size"], 11);
    assert_eq!(body["path"], file_path.as_str());
    Ok(())
}

#[test]
fn test_read_missing_file() -> Result<()> {
    let temp_dir = fixture(&[])?;
    let file_path = path_str(&temp_dir.path().join("absent.txt"));

    let body = ReadFileTool { file_path: file_path.clone() }.run();

    assert_eq!(body["error"], "File not found");
    assert_eq!(body["path"], file_path.as_str());
    assert!(body.get("success").is_none());
    Ok(())
}

#[test]
fn test_write_creates_parent_directories() -> Result<()> {
    let temp_dir = fixture(&[])?;
    let target = temp_dir.path().join("nested/dir/out.txt");

    let body = WriteFileTool {
        file_path: path_str(&target),
        content: "payload".to_string(),
        overwrite: None,
    }
    .run();

    assert_eq!(body["success"], true);
    assert_eq!(body["size"], 7);
    assert_eq!(fs::read_to_string(&target)?, "payload");
    Ok(())
}

#[test]
fn test_write_respects_overwrite_false() -> Result<()> {
    let temp_dir = fixture(&[("keep.txt", "original")])?;
    let target = temp_dir.path().join("keep.txt");

    let body = WriteFileTool {
        file_path: path_str(&target),
        content: "replacement".to_string(),
        overwrite: Some(false),
    }
    .run();

    assert!(body["error"].as_str().is_some_and(|e| e.contains("overwrite")));
    assert_eq!(fs::read_to_string(&target)?, "original");

    let replaced = WriteFileTool {
        file_path: path_str(&target),
        content: "replacement".to_string(),
        overwrite: None,
    }
    .run();
    assert_eq!(replaced["success"], true);
    assert_eq!(fs::read_to_string(&target)?, "replacement");
    Ok(())
}

#[test]
fn test_append_creates_then_extends() -> Result<()> {
    let temp_dir = fixture(&[])?;
    let target = temp_dir.path().join("log.txt");
    let append = |content: &str| {
        AppendToFileTool {
            file_path: path_str(&target),
            content: content.to_string(),
        }
        .run()
    };

    assert_eq!(append("one\n")["size"], 4);
    let body = append("two\n");

    assert_eq!(body["success"], true);
    assert_eq!(body["size"], 8);
    assert_eq!(fs::read_to_string(&target)?, "one\ntwo\n");
    Ok(())
}

#[test]
fn test_delete_file() -> Result<()> {
    let temp_dir = fixture(&[("gone.txt", "x")])?;
    let target = temp_dir.path().join("gone.txt");

    let body = DeleteFileTool { file_path: path_str(&target) }.run();
    assert_eq!(body["success"], true);
    assert!(!target.exists());

    let again = DeleteFileTool { file_path: path_str(&target) }.run();
    assert_eq!(again["error"], "File not found");
    Ok(())
}

#[test]
fn test_delete_file_refuses_directories() -> Result<()> {
    let temp_dir = fixture(&[("dir/inner.txt", "x")])?;
    let dir = temp_dir.path().join("dir");

    let body = DeleteFileTool { file_path: path_str(&dir) }.run();

    assert_eq!(body["error"], "File not found");
    assert!(dir.is_dir());
    Ok(())
}

#[test]
fn test_copy_file_and_overwrite_rules() -> Result<()> {
    let temp_dir = fixture(&[("src.txt", "data"), ("taken.txt", "old")])?;
    let source = path_str(&temp_dir.path().join("src.txt"));
    let copy = |destination: &str, overwrite: Option<bool>| {
        CopyFileTool {
            source_path: source.clone(),
            destination_path: path_str(&temp_dir.path().join(destination)),
            overwrite,
        }
        .run()
    };

    let body = copy("sub/copy.txt", None);
    assert_eq!(body["success"], true);
    assert_eq!(fs::read_to_string(temp_dir.path().join("sub/copy.txt"))?, "data");
    assert!(temp_dir.path().join("src.txt").exists());

    let refused = copy("taken.txt", None);
    assert!(refused["error"].as_str().is_some_and(|e| e.contains("already exists")));
    assert!(refused["destinationPath"].is_string());
    assert_eq!(fs::read_to_string(temp_dir.path().join("taken.txt"))?, "old");

    let forced = copy("taken.txt", Some(true));
    assert_eq!(forced["success"], true);
    assert_eq!(fs::read_to_string(temp_dir.path().join("taken.txt"))?, "data");
    Ok(())
}

#[test]
fn test_copy_missing_source() -> Result<()> {
    let temp_dir = fixture(&[])?;

    let body = CopyFileTool {
        source_path: path_str(&temp_dir.path().join("nope.txt")),
        destination_path: path_str(&temp_dir.path().join("out.txt")),
        overwrite: None,
    }
    .run();

    assert_eq!(body["error"], "Source file not found");
    assert!(body["sourcePath"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_move_file() -> Result<()> {
    let temp_dir = fixture(&[("from.txt", "moving"), ("to.txt", "existing")])?;
    let source = temp_dir.path().join("from.txt");
    let destination = temp_dir.path().join("to.txt");

    let refused = MoveFileTool {
        source_path: path_str(&source),
        destination_path: path_str(&destination),
        overwrite: None,
    }
    .run();
    assert!(refused.get("error").is_some());
    assert!(source.exists());

    let tool = MoveFileTool {
        source_path: path_str(&source),
        destination_path: path_str(&destination),
        overwrite: Some(true),
    };
    let body = envelope(&tool.call_tool().await?)?;

    assert_eq!(body["success"], true);
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&destination)?, "moving");
    Ok(())
}
