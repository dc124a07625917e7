//! End-to-end feature scenarios driven through the dispatch layer with a
//! real tempdir workspace behind the server.

mod common;

use common::{diagnostics_for, did_open, initialize, new_server, request_ok};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

fn write(root: &Path, name: &str, text: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn buffer_uri(root: &Path, name: &str) -> String {
    notes_uri::fs_path_to_uri(root.join(name)).unwrap()
}

#[test]
fn wikilink_completion_ranks_prefix_matches() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["alpha.md", "algebra.md", "beta.md"] {
        write(dir.path(), name, "content\n");
    }

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "notes.md");
    did_open(&mut server, &uri, 1, "see [[al");

    let result = request_ok(
        &mut server,
        "textDocument/completion",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 8 }
        }),
    );

    assert_eq!(result["isIncomplete"], false);
    let items = result["items"].as_array().unwrap();
    let labels: Vec<&str> = items.iter().map(|i| i["label"].as_str().unwrap()).collect();
    assert_eq!(labels, ["alpha.md", "algebra.md"]);

    for (item, expected) in items.iter().zip(["alpha.md]]", "algebra.md]]"]) {
        assert_eq!(item["kind"], 17);
        assert_eq!(item["textEdit"]["newText"], expected);
        assert_eq!(item["textEdit"]["range"]["start"], json!({ "line": 0, "character": 6 }));
        assert_eq!(item["textEdit"]["range"]["end"], json!({ "line": 0, "character": 8 }));
    }
}

#[test]
fn tag_completion_counts_carrier_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.md", "---\ntags: [project, programming]\n---\n");
    write(dir.path(), "b.md", "---\ntags: [project]\n---\n");

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "c.md");
    did_open(&mut server, &uri, 1, "---\ntags: [pr\n---\n");

    let result = request_ok(
        &mut server,
        "textDocument/completion",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 1, "character": 9 }
        }),
    );

    let items = result["items"].as_array().unwrap();
    let labels: Vec<&str> = items.iter().map(|i| i["label"].as_str().unwrap()).collect();
    assert_eq!(labels, ["project", "programming"]);
    assert_eq!(items[0]["detail"], "Used in 2 files");
    assert_eq!(items[1]["detail"], "Used in 1 files");
    assert_eq!(items[0]["kind"], 14);
    assert_eq!(items[0]["insertText"], "project");
}

#[test]
fn definition_jumps_to_target_file_start() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "alpha.md", "the target\n");

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "notes.md");
    did_open(&mut server, &uri, 1, "intro [[alpha|the start]]");

    let result = request_ok(
        &mut server,
        "textDocument/definition",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 12 }
        }),
    );

    assert_eq!(result["uri"], buffer_uri(dir.path(), "alpha.md"));
    assert_eq!(result["range"], json!({
        "start": { "line": 0, "character": 0 },
        "end": { "line": 0, "character": 0 }
    }));
}

#[test]
fn broken_link_diagnostic_appears_and_clears_on_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "other.md", "x\n");

    let (mut server, buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "draft.md");
    did_open(&mut server, &uri, 1, "[[ghost]]");

    let published = diagnostics_for(&buffer, &uri);
    // An empty clearing set precedes the real one.
    assert_eq!(published.len(), 2);
    assert_eq!(published[0], json!([]));
    let diags = published[1].as_array().unwrap();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0]["severity"], 1);
    assert!(diags[0]["message"].as_str().unwrap().contains("ghost"));
    assert_eq!(diags[0]["range"], json!({
        "start": { "line": 0, "character": 0 },
        "end": { "line": 0, "character": 9 }
    }));

    // The missing note appears; the watcher-path rebuild revalidates.
    write(dir.path(), "ghost.md", "now exists\n");
    server.rebuild_workspace();

    let published = diagnostics_for(&buffer, &uri);
    assert_eq!(published.last().unwrap(), &json!([]));
}

#[test]
fn tag_rename_edits_every_carrier() {
    let dir = tempfile::tempdir().unwrap();
    let text = "---\ntags: [project]\n---\nbody\n";
    write(dir.path(), "a.md", text);
    write(dir.path(), "b.md", text);

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "a.md");
    did_open(&mut server, &uri, 1, text);

    let result = request_ok(
        &mut server,
        "textDocument/rename",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 1, "character": 8 },
            "newName": "work"
        }),
    );

    let changes = result["changes"].as_object().unwrap();
    assert_eq!(changes.len(), 2);
    for name in ["a.md", "b.md"] {
        let edits = changes[&buffer_uri(dir.path(), name)].as_array().unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0]["newText"], "work");
        assert_eq!(edits[0]["range"], json!({
            "start": { "line": 1, "character": 7 },
            "end": { "line": 1, "character": 14 }
        }));
    }
}

#[test]
fn wikilink_rename_moves_the_file_and_rewrites_links() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "old.md", "target note\n");
    write(dir.path(), "notes/intro.md", "links to [[old]]\n");

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "notes/intro.md");
    did_open(&mut server, &uri, 1, "links to [[old]]\n");

    let result = request_ok(
        &mut server,
        "textDocument/rename",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 12 },
            "newName": "new-name"
        }),
    );

    let changes = result["documentChanges"].as_array().unwrap();
    assert_eq!(changes.len(), 2);

    // Text edits first, the file rename last, one atomic descriptor.
    assert_eq!(changes[0]["textDocument"]["uri"], uri);
    let edits = changes[0]["edits"].as_array().unwrap();
    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0]["newText"], "new-name");
    assert_eq!(edits[0]["range"], json!({
        "start": { "line": 0, "character": 11 },
        "end": { "line": 0, "character": 14 }
    }));

    assert_eq!(changes[1]["kind"], "rename");
    assert_eq!(changes[1]["oldUri"], buffer_uri(dir.path(), "old.md"));
    assert_eq!(changes[1]["newUri"], buffer_uri(dir.path(), "new-name.md"));

    // The index already sees the new world: the old target is broken now,
    // the new one resolves.
    let definition = request_ok(
        &mut server,
        "textDocument/definition",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 12 }
        }),
    );
    assert_eq!(definition, Value::Null);

    did_open(
        &mut server,
        &buffer_uri(dir.path(), "fresh.md"),
        1,
        "see [[new-name]]",
    );
    let definition = request_ok(
        &mut server,
        "textDocument/definition",
        json!({
            "textDocument": { "uri": buffer_uri(dir.path(), "fresh.md") },
            "position": { "line": 0, "character": 8 }
        }),
    );
    assert_eq!(definition["uri"], buffer_uri(dir.path(), "new-name.md"));
}

#[test]
fn references_cover_open_buffers_and_disk_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "target.md", "x\n");
    write(dir.path(), "a.md", "first [[target]]\n");
    write(dir.path(), "b.md", "second [[Target|alias]]\n");

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "a.md");
    did_open(&mut server, &uri, 1, "first [[target]]\n");

    let result = request_ok(
        &mut server,
        "textDocument/references",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 9 }
        }),
    );

    let locations = result.as_array().unwrap();
    assert_eq!(locations.len(), 2);
    let uris: Vec<&str> = locations.iter().map(|l| l["uri"].as_str().unwrap()).collect();
    assert!(uris.contains(&uri.as_str()));
    assert!(uris.contains(&buffer_uri(dir.path(), "b.md").as_str()));
}

#[test]
fn hover_previews_target_content() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "alpha.md", "Alpha note content.\n");

    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "notes.md");
    did_open(&mut server, &uri, 1, "see [[alpha]]");

    let result = request_ok(
        &mut server,
        "textDocument/hover",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 7 }
        }),
    );

    assert_eq!(result["contents"]["kind"], "markdown");
    let value = result["contents"]["value"].as_str().unwrap();
    assert!(value.starts_with("**alpha**"));
    assert!(value.contains("---"));
    assert!(value.contains("Alpha note content."));
    assert!(!value.contains("truncated"));
}

#[test]
fn hover_on_plain_text_is_null() {
    let dir = tempfile::tempdir().unwrap();
    let (mut server, _buffer) = new_server();
    initialize(&mut server, dir.path());

    let uri = buffer_uri(dir.path(), "notes.md");
    did_open(&mut server, &uri, 1, "no links here");

    let result = request_ok(
        &mut server,
        "textDocument/hover",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": 0, "character": 3 }
        }),
    );
    assert_eq!(result, Value::Null);
}
