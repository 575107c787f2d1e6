use multitrie::trie::{Mode, Trie};
use tracing_subscriber::EnvFilter;

// Split a filesystem path into segments, ignoring empty components.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn main() {
    // RUST_LOG=multitrie=trace shows every path materialization
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut index: Trie<&str, &str> = Trie::with_value("filesystem root");
    index.insert(segments("/src"), "source code");
    index.insert(segments("/src/testdata"), "test data");
    index.insert(segments("/src/testdata/race/7"), "test case for race condition #7");
    index.insert(segments("/src/cmd/main.go"), "main go program");
    index.insert(segments("/release/amd64/bin/foo"), "binary release foo for amd64");
    index.insert(segments("/release/aarch64/bin/foo"), "binary release foo for aarch64");

    for path in ["/src/testdata", "/src/testdata/race", "/release/badarch"] {
        println!(
            "{path}: exact={} prefix={}",
            index.search(Mode::Exact, segments(path)),
            index.search(Mode::Prefix, segments(path))
        );
    }

    if let Err(e) = index.insert_strict(segments("/docs/api"), "api docs") {
        println!("strict insert of /docs/api refused: {e}");
    }
    if let Err(e) = index.insert_no_overwrite(segments("/src"), "other code") {
        println!("insert of /src refused: {e}");
    }

    println!("everything under /release:");
    if let Some(release) = index.get(segments("/release")) {
        for entry in release.iter_sorted() {
            let key = entry.key.iter().map(|s| **s).collect::<Vec<_>>().join("/");
            println!("  /release/{key}: {}", entry.value);
        }
    }

    if let Some(removed) = index.remove(segments("/src/testdata")) {
        println!("removed /src/testdata holding {} value(s)", removed.count());
    }
    println!("/src unique: {}", index.unique(segments("/src")));
}
