//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow `SWEEP::*::V1\0` naming
//! 4. `canonical_hash` is SHA-256 over prefix + payload, computed independently
//! 5. No raw `SWEEP::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use sweep_kernel::proof::hash::canonical_hash;
use sweep_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_unique_and_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
        assert!(domain.as_bytes().ends_with(&[0]), "{domain} is not null-terminated");
    }
}

#[test]
fn hash_domain_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"SWEEP::"), "{domain} does not start with SWEEP::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn canonical_hash_matches_independent_sha256() {
    for domain in HashDomain::ALL {
        let payload = b"{\"cost\":11}";
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(payload);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(*domain, payload).as_str(), expected);
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let production_dirs = ["kernel/src", "search/src", "harness/src"]
        .map(|d| manifest.join("../..").join(d));

    let mut violations = Vec::new();
    for dir in &production_dirs {
        for file in rust_files(dir) {
            if file.file_name().is_some_and(|n| n == "hash_domain.rs") {
                continue;
            }
            let text = std::fs::read_to_string(&file).unwrap();
            if text.contains("b\"SWEEP::") {
                violations.push(file.display().to_string());
            }
        }
    }
    assert!(
        violations.is_empty(),
        "raw SWEEP:: domain literals outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(rust_files(&path));
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
    out
}
