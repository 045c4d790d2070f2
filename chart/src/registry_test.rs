use super::*;

#[test]
fn registry_starts_empty() {
    let registry = ChartRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn insert_tracks_one_handle_per_id() {
    let mut registry = ChartRegistry::new();
    registry.insert("a".to_owned(), Chart::detached());
    registry.insert("b".to_owned(), Chart::detached());
    assert_eq!(registry.len(), 2);

    // Re-registering an id replaces (and destroys) the old handle.
    registry.insert("a".to_owned(), Chart::detached());
    assert_eq!(registry.len(), 2);
}

#[test]
fn teardown_empties_the_registry() {
    let mut registry = ChartRegistry::new();
    registry.insert("a".to_owned(), Chart::detached());
    registry.teardown_all();
    assert!(registry.is_empty());
}

#[test]
fn teardown_is_idempotent_and_safe_when_empty() {
    let mut registry = ChartRegistry::new();
    registry.teardown_all();
    registry.insert("a".to_owned(), Chart::detached());
    registry.teardown_all();
    registry.teardown_all();
    assert!(registry.is_empty());
}

#[test]
fn repeated_render_passes_never_accumulate_handles() {
    let mut registry = ChartRegistry::new();
    for pass in 0..5 {
        registry.teardown_all();
        for sector in 0..3 {
            registry.insert(format!("{pass}-{sector}"), Chart::detached());
        }
        assert_eq!(registry.len(), 3);
    }
}

#[test]
fn detached_chart_destroy_is_a_no_op() {
    let mut chart = Chart::detached();
    chart.destroy();
    chart.destroy();
}
