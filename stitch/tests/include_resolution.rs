//! Integration tests for include resolution and expansion.

mod common;

use common::SiteFixture;
use stitch::template::IncludeExpander;
use stitch::{resolve_include, Error, IncludePathKind};

#[test]
fn test_three_kinds_resolve() {
    let site = SiteFixture::new()
        .with_file("src/pages/nav.ejs", "")
        .with_file("src/shared/partial.ejs", "");
    let root = site.source_root();

    let relative = resolve_include("./nav.ejs", &root.join("pages/nav.ejs"), &root).unwrap();
    assert_eq!(relative.filename, root.join("pages/nav.ejs"));

    let rooted = resolve_include("/shared/partial.ejs", &root.join("ignored"), &root).unwrap();
    assert_eq!(
        rooted.filename.to_string_lossy(),
        format!("{}/./shared/partial.ejs", root.display())
    );

    let bare = resolve_include("shared/partial.ejs", &root.join("ignored"), &root).unwrap();
    assert_eq!(bare.filename, root.join("shared/partial.ejs"));
}

#[test]
fn test_relative_kind_trusts_candidate_only() {
    let site = SiteFixture::new().with_file("src/elsewhere/real.ejs", "");
    let root = site.source_root();

    // The directive text says one thing, the candidate another: the candidate wins.
    let resolved =
        resolve_include("./nothing-here.ejs", &root.join("elsewhere/real.ejs"), &root).unwrap();
    assert_eq!(resolved.filename, root.join("elsewhere/real.ejs"));
}

#[test]
fn test_not_found_message_names_original_text() {
    let site = SiteFixture::new().with_file("src/index.ejs", "");
    let root = site.source_root();

    for original in ["./gone.ejs", "/gone.ejs", "gone.ejs", "::not a path::"] {
        let err = resolve_include(original, &root.join("gone.ejs"), &root).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Not Found: could not resolve {original}")
        );
        assert!(err.is_include_not_found());
    }
}

#[test]
fn test_classification_uses_first_character_only() {
    assert_eq!(IncludePathKind::classify(".hidden"), IncludePathKind::Relative);
    assert_eq!(IncludePathKind::classify("//double"), IncludePathKind::RootRelative);
    assert_eq!(IncludePathKind::classify(""), IncludePathKind::Bare);
    assert_eq!(IncludePathKind::classify("a/./b"), IncludePathKind::Bare);
}

#[test]
fn test_expansion_across_directories() {
    let site = SiteFixture::new()
        .with_file(
            "src/blog/post.ejs",
            "<%- include('/layout/_header.ejs') %><article/><%- include('../layout/_footer') %>",
        )
        .with_file("src/layout/_header.ejs", "<header><%- include('./_logo.ejs') %></header>")
        .with_file("src/layout/_logo.ejs", "<img>")
        .with_file("src/layout/_footer.ejs", "<footer/>");
    let root = site.source_root();

    let page = IncludeExpander::new(&root, "ejs")
        .expand_file(&root.join("blog/post.ejs"))
        .unwrap();

    assert_eq!(page.text, "<header><img></header><article/><footer/>");
    assert_eq!(page.fragments.len(), 3);
}

#[test]
fn test_expansion_stops_at_first_missing_fragment() {
    let site = SiteFixture::new()
        .with_file("src/index.ejs", "<%- include('./_a.ejs') %>")
        .with_file("src/_a.ejs", "<%- include('shared/_b.ejs') %>");
    let root = site.source_root();

    let err = IncludeExpander::new(&root, "ejs")
        .expand_file(&root.join("index.ejs"))
        .unwrap_err();
    assert!(matches!(err, Error::IncludeNotFound { ref original } if original == "shared/_b.ejs"));
}
