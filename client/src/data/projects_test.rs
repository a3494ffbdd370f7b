use super::*;

#[test]
fn slugs_are_unique_and_nonempty() {
    let projects = all();
    assert!(!projects.is_empty());
    for (i, a) in projects.iter().enumerate() {
        assert!(!a.slug.is_empty());
        for b in &projects[i + 1..] {
            assert_ne!(a.slug, b.slug);
        }
    }
}

#[test]
fn by_slug_finds_every_project() {
    for project in all() {
        let found = by_slug(&project.slug).unwrap();
        assert_eq!(found.title, project.title);
    }
}

#[test]
fn by_slug_unknown_returns_none() {
    assert!(by_slug("does-not-exist").is_none());
}

#[test]
fn every_connection_resolves() {
    // The viewer tolerates dangling connections, but authored content
    // should not contain any.
    for project in all() {
        let resolved = project.graph.resolve_edges().len();
        assert_eq!(
            resolved,
            project.graph.connections.len(),
            "dangling connection in {}",
            project.slug
        );
    }
}

#[test]
fn node_positions_are_percentages() {
    for project in all() {
        for c in &project.graph.components {
            assert!((0.0..=100.0).contains(&c.x), "{}: {}", project.slug, c.id);
            assert!((0.0..=100.0).contains(&c.y), "{}: {}", project.slug, c.id);
        }
    }
}

#[test]
fn node_ids_are_unique_within_a_graph() {
    for project in all() {
        let ids: Vec<&str> = project.graph.components.iter().map(|c| c.id.as_str()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "{}: duplicate {id}", project.slug);
        }
    }
}

#[test]
fn detail_page_content_is_complete() {
    for project in all() {
        assert!(!project.title.is_empty());
        assert!(!project.summary.is_empty());
        assert!(!project.tech.is_empty());
        assert!(!project.screenshots.is_empty(), "{}", project.slug);
        assert!(!project.snippets.is_empty(), "{}", project.slug);
        assert!(!project.graph.components.is_empty(), "{}", project.slug);
    }
}

#[test]
fn snippets_have_language_tags() {
    for project in all() {
        for snippet in &project.snippets {
            assert!(!snippet.language.is_empty());
            assert!(!snippet.code.is_empty());
        }
    }
}
