//! Test fixtures and constants.

/// Token the mock server expects in `PRIVATE-TOKEN`.
pub const TOKEN: &str = "fakeToken";

/// Path of the variables listing on the mock server.
pub const VARIABLES_PATH: &str = "/api/v4/projects/1/variables";

/// Path of the files API base on the mock server.
pub const FILES_PATH: &str = "/api/v4/projects/1/repository/files/";

/// Address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";

/// Variables listing as GitLab returns it.
pub const VARIABLES: &str = r#"[
    {
        "environment_scope": "*",
        "masked": false,
        "protected": false,
        "value": "it works",
        "key": "smoketest",
        "variable_type": "env_var"
    },
    {
        "environment_scope": "*",
        "masked": false,
        "protected": false,
        "value": "email@address.de",
        "key": "user",
        "variable_type": "env_var"
    }
]
"#;

/// Listing with the same key twice.
pub const DUPLICATE_VARIABLES: &str = r#"[
    {"key": "dup", "value": "first"},
    {"key": "other", "value": "x"},
    {"key": "dup", "value": "second"}
]"#;

/// Files API response carrying plain text content.
pub const FILE_RECORD: &str = r#"{"content":"file_content_here"}"#;

/// Files API response as GitLab returns it, base64 content included.
pub const FILE_RECORD_FULL: &str = r#"{
    "file_name": "test.txt",
    "file_path": "certificates/test.txt",
    "size": 17,
    "encoding": "base64",
    "content_sha256": "4c294617b60715c1d218e61164a3abd4808a4284cbc30e6728a01ad9aada4481",
    "ref": "main",
    "blob_id": "79f7bbd25901e8334750839545a9bd021f0e4c83",
    "commit_id": "d5a3ff139356ce33e37e73add446f16869741b50",
    "last_commit_id": "570e7b2abdd848b95f2f578043fc23bd6f6fd24d",
    "content": "ZmlsZV9jb250ZW50X2hlcmU="
}"#;

/// Encoded form of `/certificates/test.txt`.
pub const ENCODED_TEST_FILE: &str = "certificates%2Ftest%2Etxt";

/// Body that is not JSON.
pub const MALFORMED: &str = "<html>502 Bad Gateway</html>";
