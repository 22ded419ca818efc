//! Resolves a small `key=value` configuration blob using only byte-level
//! operations, the way a network daemon might load settings it receives from
//! an untrusted channel without ever validating UTF-8.
//!
//! The input looks roughly like this:
//!
//! ```text
//! # service endpoints
//! LISTEN=0.0.0.0:8080
//! PEER=${HOST}:9090
//! ```
//!
//! Four things happen while the blob is processed:
//!
//! 1. Lines are separated with [`split`], dropping blank lines on the way.
//! 2. Comments are stripped and `key=value` pairs are cut at the first
//!    delimiter with [`split_first`], so padded base64 values keep their
//!    trailing `=`.
//! 3. `${HOST}` placeholders are expanded with [`replace`], gated by a cheap
//!    [`starts_with`] probe.
//! 4. Keys are lower-cased in place, and long opaque values are folded into
//!    fixed-width groups with [`chunk`] for display.
//!
//! Run with
//!
//! ```bash
//! cargo run -p stringops --example config_lines
//! ```
//!
//! [`split`]: stringops::split
//! [`split_first`]: stringops::split_first
//! [`replace`]: stringops::replace
//! [`starts_with`]: stringops::starts_with
//! [`chunk`]: stringops::chunk

use core::fmt::Write as _;

use bstr::ByteSlice;
use stringops::{
    as_upper, chunk, ends_with, replace, split, split_first, starts_with, to_lower_inplace,
};

/// The value substituted for `${HOST}`. In real life this would come from the
/// environment.
const HOST: &[u8] = b"10.0.0.7";

const CONFIG: &[u8] = b"# service endpoints\n\
LISTEN=0.0.0.0:8080\n\
PEER=${HOST}:9090\n\
ALLOW=10.0.0.0/8,127.0.0.1,192.168.0.0/16\n\
\n\
# display\n\
BANNER=V2VsY29tZSB0byBzdHJpbmdvcHM=\n";

fn main() {
    let mut transcript = String::new();
    writeln!(transcript, "{}", as_upper(b"resolved config").as_bstr()).unwrap();

    for line in split(CONFIG, b"\n", false) {
        // Everything from the first `#` onward is a comment.
        let (content, _) = split_first(line, b"#");
        if content.is_empty() {
            continue;
        }

        let (raw_key, value) = split_first(content, b"=");
        let mut key = raw_key.to_vec();
        to_lower_inplace(&mut key);

        let resolved = if starts_with(value, b"${") {
            replace(value, b"${HOST}", HOST)
        } else {
            value.to_vec()
        };

        match key.as_slice() {
            b"allow" => {
                let peers: Vec<String> = split(&resolved, b",", false)
                    .iter()
                    .map(|peer| format!("{:?}", peer.as_bstr()))
                    .collect();
                writeln!(transcript, "allow = [{}]", peers.join(", ")).unwrap();
            }
            b"banner" => {
                let padded = if ends_with(&resolved, b"=") { " (padded)" } else { "" };
                writeln!(transcript, "banner = {:?}{padded}", resolved.as_bstr()).unwrap();

                let groups: Vec<String> = chunk(&resolved, 8, 0)
                    .iter()
                    .map(|group| format!("{:?}", group.as_bstr()))
                    .collect();
                writeln!(transcript, "banner groups: [{}]", groups.join(", ")).unwrap();
            }
            _ => {
                writeln!(transcript, "{} = {:?}", key.as_bstr(), resolved.as_bstr()).unwrap();
            }
        }
    }

    print!("{transcript}");

    // Keep the rendered transcript stable. Run `cargo insta review` after the
    // first execution to approve the snapshot.
    #[cfg(not(miri))]
    insta::assert_snapshot!(transcript, @r#"
    RESOLVED CONFIG
    listen = "0.0.0.0:8080"
    peer = "10.0.0.7:9090"
    allow = ["10.0.0.0/8", "127.0.0.1", "192.168.0.0/16"]
    banner = "V2VsY29tZSB0byBzdHJpbmdvcHM=" (padded)
    banner groups: ["V2VsY29t", "ZSB0byBz", "dHJpbmdv", "cHM="]
    "#);
}
