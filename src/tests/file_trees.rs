use super::*;

// Payloads shaped like a model's "file tree" answer: nested entries whose
// `contents` strings hold literal source code.

#[test]
fn mangled_file_tree_payload_round_trips() {
    // Raw newlines and unescaped quotes inside the code, plus a truncated
    // tail (the root brace is missing).
    let raw = concat!(
        "{\n",
        "  \"fileTree\": {\n",
        "    \"server.js\": {\n",
        "      \"file\": {\n",
        "        \"contents\": \"const app = require(\"express\")();\napp.listen(3000);\"\n",
        "      }\n",
        "    },\n",
        "    \".gitignore\": {\n",
        "      \"file\": {\n",
        "        \"contents\": \"node_modules\ndist\n\"\n",
        "      }\n",
        "    }\n",
        "  }\n"
    );
    let v = parsed(raw);
    let server = v["fileTree"]["server.js"]["file"]["contents"]
        .as_str()
        .unwrap();
    assert!(server.contains("require(\"express\")"));
    assert!(server.contains('\n'));
    let ignore = v["fileTree"][".gitignore"]["file"]["contents"]
        .as_str()
        .unwrap();
    assert_eq!(ignore, "node_modules\ndist\n");
}

#[test]
fn well_formed_payload_takes_the_fast_path() {
    let raw = r#"{"fileTree":{"a.txt":{"file":{"contents":"hello\nworld"}}}}"#;
    let v = parsed(raw);
    assert_eq!(v["fileTree"]["a.txt"]["file"]["contents"], "hello\nworld");
}

#[test]
fn pre_escaped_code_survives_the_pipeline_unchanged() {
    // Properly escaped contents with a trailing comma elsewhere: only the
    // comma should be repaired, the code must stay byte-identical.
    let raw = "{\"main.py\": {\"file\": {\"contents\": \"print(\\\"hi\\\")\\n\"}},}";
    let v = parsed(raw);
    assert_eq!(v["main.py"]["file"]["contents"], "print(\"hi\")\n");
}
