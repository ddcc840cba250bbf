//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Catalog Integrity
//! - T1: Rule Semantics
//! - T2: Transition Accounting
//! - T3: End-to-End Scenarios

use configurator_core::{
    Catalog, CatalogBuilder, CatalogEntry, ConfiguratorError, OptionId, RuleId, SelectionEngine,
    State, Status,
};
use std::sync::Arc;

fn id(s: &str) -> OptionId {
    OptionId::from(s)
}

fn state_from(entries: Vec<CatalogEntry>) -> State {
    let catalog = CatalogBuilder::from_entries(entries)
        .expect("catalog")
        .build();
    State::new(Arc::new(catalog))
}

fn status(state: &State, option: &str) -> Status {
    SelectionEngine::get_status(state, &id(option)).expect("status")
}

fn select(state: &State, option: &str) -> State {
    SelectionEngine::select_option(state, &id(option)).expect("select")
}

fn deselect(state: &State, option: &str) -> State {
    SelectionEngine::deselect_option(state, &id(option)).expect("deselect")
}

/// Parent P with children C1, C2 under a rule of the given kind.
fn anchored(kind: &str) -> State {
    state_from(vec![
        CatalogEntry::new("R", kind, "P", true, "Bundle"),
        CatalogEntry::new("R", kind, "C1", false, "Part one"),
        CatalogEntry::new("R", kind, "C2", false, "Part two"),
    ])
}

// =============================================================================
// TIER T0: CATALOG INTEGRITY
// =============================================================================

mod t0_catalog_integrity {
    use super::*;

    /// T0.1: Every reference between options and rules resolves.
    #[test]
    fn built_catalog_is_referentially_closed() {
        let state = state_from(vec![
            CatalogEntry::new("7062192", "NW", "125089", true, "Sport pack"),
            CatalogEntry::new("7062192", "NW", "129808", false, "Comfort pack"),
            CatalogEntry::new("7060187", "OO", "20844", false, "Pearl - Arrow Grey"),
            CatalogEntry::new("7060187", "OO", "125089", false, "Sport pack"),
        ]);
        let catalog = state.catalog();

        for option in catalog.collection() {
            for rule_id in &option.rules {
                let rule = catalog.rule(rule_id).expect("rule exists");
                assert!(rule.members().contains(&option.id));
            }
        }
        for rule in catalog.rules() {
            for member in rule.members() {
                let option = catalog.option(member).expect("option exists");
                assert!(option.belongs_to(&rule.id));
            }
        }
    }

    /// T0.2: Missing name is rejected at build time.
    #[test]
    fn missing_name_rejected() {
        let result =
            CatalogBuilder::from_entries(vec![CatalogEntry::new("R", "OO", "a", false, "")]);
        assert!(matches!(
            result,
            Err(ConfiguratorError::InvalidCatalogEntry { .. })
        ));
    }

    /// T0.3: Missing type is rejected at build time.
    #[test]
    fn missing_type_rejected() {
        let result =
            CatalogBuilder::from_entries(vec![CatalogEntry::new("R", "", "a", false, "A")]);
        assert!(matches!(
            result,
            Err(ConfiguratorError::InvalidCatalogEntry { .. })
        ));
    }

    /// T0.4: Duplicate tuples keep option memberships but not rule children.
    #[test]
    fn duplicate_tuples_policy_is_pinned() {
        let entry = CatalogEntry::new("7062192", "NW", "125089", false, "Sport pack");
        let state = state_from(vec![entry.clone(), entry.clone(), entry.clone(), entry]);
        let catalog = state.catalog();

        let option = catalog.option(&id("125089")).expect("option");
        assert_eq!(option.rules, vec![RuleId::from("7062192"); 4]);

        let rule = catalog.rule(&RuleId::from("7062192")).expect("rule");
        assert_eq!(rule.child_options, vec![id("125089")]);
    }

    /// T0.5: Baseline catalog matches the nine-colour OO rule.
    #[test]
    fn baseline_catalog_shape() {
        let catalog = Catalog::baseline();
        let rule = catalog.rule(&RuleId::from("7060187")).expect("rule");
        assert_eq!(rule.child_options.len(), 9);
        assert!(rule.child_options.contains(&id("20844")));
        assert!(rule.child_options.contains(&id("27128")));
    }
}

// =============================================================================
// TIER T1: RULE SEMANTICS
// =============================================================================

mod t1_rule_semantics {
    use super::*;

    /// T1.1: OO exclusivity on the baseline colour rule.
    #[test]
    fn one_of_exclusivity() {
        let state = select(&State::baseline(), "20844");
        assert_eq!(status(&state, "27128"), Status::Disabled);
        assert_eq!(status(&state, "20844"), Status::Selected);
    }

    /// T1.2: RA parent stays disabled until every child is selected.
    #[test]
    fn require_all_gating() {
        let state = anchored("RA");
        assert_eq!(status(&state, "P"), Status::Disabled);

        let state = select(&state, "C1");
        assert_eq!(status(&state, "P"), Status::Disabled);

        let state = select(&state, "C2");
        assert_eq!(status(&state, "P"), Status::Available);
    }

    /// T1.3: RO parent unlocks with any one child.
    #[test]
    fn require_one_gating() {
        let state = anchored("RO");
        assert_eq!(status(&state, "P"), Status::Disabled);
        assert_eq!(status(&state, "C1"), Status::Available);
        assert_eq!(status(&state, "C2"), Status::Available);

        let state = select(&state, "C2");
        assert_eq!(status(&state, "P"), Status::Available);
    }

    /// T1.4: NW exclusion is symmetric between parent and child.
    #[test]
    fn not_without_symmetry() {
        let state = state_from(vec![
            CatalogEntry::new("7062192", "NW", "125089", true, "Sport pack"),
            CatalogEntry::new("7062192", "NW", "129808", false, "Comfort pack"),
        ]);

        let parent_first = select(&state, "125089");
        assert_eq!(status(&parent_first, "129808"), Status::Disabled);

        let child_first = select(&state, "129808");
        assert_eq!(status(&child_first, "125089"), Status::Disabled);
    }

    /// T1.5: OO and NW do nothing before any member is selected.
    #[test]
    fn inactive_rules_disable_nothing() {
        let state = state_from(vec![
            CatalogEntry::new("N", "NW", "a", true, "A"),
            CatalogEntry::new("N", "NW", "b", false, "B"),
            CatalogEntry::new("O", "OO", "c", false, "C"),
            CatalogEntry::new("O", "OO", "d", false, "D"),
        ]);
        for option in ["a", "b", "c", "d"] {
            assert_eq!(status(&state, option), Status::Available);
        }
    }

    /// T1.6: A selected option reports SELECTED even when a rule would block it.
    #[test]
    fn selected_beats_disabled() {
        let state = select(&select(&State::baseline(), "20844"), "27128");
        assert_eq!(status(&state, "20844"), Status::Selected);
        assert_eq!(status(&state, "27128"), Status::Selected);
        assert_eq!(status(&state, "93020"), Status::Disabled);
    }

    /// T1.7: Any blocking rule disables an option that belongs to several.
    #[test]
    fn first_blocking_rule_wins() {
        let state = state_from(vec![
            CatalogEntry::new("colour", "OO", "x", false, "X"),
            CatalogEntry::new("colour", "OO", "y", false, "Y"),
            CatalogEntry::new("pack", "RA", "y", true, "Y"),
            CatalogEntry::new("pack", "RA", "z", false, "Z"),
        ]);
        // y is blocked by RA until z is selected
        assert_eq!(status(&state, "y"), Status::Disabled);

        let state = select(&state, "z");
        assert_eq!(status(&state, "y"), Status::Available);

        // x activates the colour rule, which blocks y again
        let state = select(&state, "x");
        assert_eq!(status(&state, "y"), Status::Disabled);
    }
}

// =============================================================================
// TIER T2: TRANSITION ACCOUNTING
// =============================================================================

mod t2_transition_accounting {
    use super::*;

    /// T2.1: Deselecting one of two selected members keeps the rule active.
    #[test]
    fn shared_rule_stays_active() {
        let state = state_from(vec![
            CatalogEntry::new("R", "NW", "a", true, "A"),
            CatalogEntry::new("R", "NW", "b", false, "B"),
            CatalogEntry::new("R", "NW", "c", false, "C"),
        ]);
        let state = select(&select(&state, "a"), "b");
        let state = deselect(&state, "a");

        assert!(state.is_rule_active(&RuleId::from("R")));
        assert_eq!(status(&state, "c"), Status::Disabled);
        assert_eq!(status(&state, "a"), Status::Disabled);
    }

    /// T2.2: Deselecting the last member deactivates the rule.
    #[test]
    fn last_member_deactivates() {
        let state = deselect(&select(&State::baseline(), "20844"), "20844");
        assert!(state.active_rules().is_empty());
    }

    /// T2.3: Select then deselect restores both multisets.
    #[test]
    fn select_deselect_inverse() {
        let state = state_from(vec![
            CatalogEntry::new("R", "OO", "a", false, "A"),
            CatalogEntry::new("S", "NW", "a", true, "A"),
            CatalogEntry::new("S", "NW", "b", false, "B"),
        ]);
        let after = deselect(&select(&state, "a"), "a");

        assert_eq!(after.selected(), state.selected());
        assert_eq!(after.active_rules(), state.active_rules());
    }

    /// T2.4: Toggle is select then deselect.
    #[test]
    fn toggle_round_trip() {
        let start = State::baseline();
        let on = SelectionEngine::toggle_option(&start, &id("93020")).expect("toggle");
        let off = SelectionEngine::toggle_option(&on, &id("93020")).expect("toggle");

        assert_eq!(on.selected(), &[id("93020")]);
        assert_eq!(off, start);
    }

    /// T2.5: Deselecting two selected OO siblings leaves one activation behind.
    ///
    /// Each deselect counts two selected members (itself included), then one,
    /// so only the second removes an entry. The leftover entry disables
    /// nothing because no child is selected.
    #[test]
    fn sibling_release_leaves_one_activation() {
        let state = select(&select(&State::baseline(), "20844"), "27128");
        assert_eq!(state.activation_count(&RuleId::from("7060187")), 2);

        let state = deselect(&deselect(&state, "20844"), "27128");
        assert!(state.selected().is_empty());
        assert_eq!(state.active_rules(), &[RuleId::from("7060187")]);
        for colour in ["20844", "27128", "93020", "129827"] {
            assert_eq!(status(&state, colour), Status::Available);
        }
    }

    /// T2.6: Unknown ids are rejected without changing anything.
    #[test]
    fn unknown_option_rejected() {
        let state = State::baseline();
        let result = SelectionEngine::toggle_option(&state, &id("000000"));
        assert!(matches!(result, Err(ConfiguratorError::UnknownOption(o)) if o == id("000000")));
        assert!(state.selected().is_empty());
    }
}

// =============================================================================
// TIER T3: END-TO-END SCENARIOS
// =============================================================================

mod t3_scenarios {
    use super::*;

    const COLOURS: [&str; 9] = [
        "20844", "27128", "93020", "104177", "105356", "111413", "122473", "125093", "129827",
    ];

    /// T3.1: Nine-colour scenario: select one, others disabled, deselect restores.
    #[test]
    fn nine_colour_select_and_release() {
        let start = State::baseline();
        for colour in COLOURS {
            assert_eq!(status(&start, colour), Status::Available);
        }

        let picked = select(&start, "20844");
        assert_eq!(status(&picked, "20844"), Status::Selected);
        for colour in &COLOURS[1..] {
            assert_eq!(status(&picked, colour), Status::Disabled);
        }

        let released = deselect(&picked, "20844");
        for colour in COLOURS {
            assert_eq!(status(&released, colour), Status::Available);
        }
    }

    /// T3.2: Status queries are repeatable.
    #[test]
    fn status_is_idempotent() {
        let state = select(&State::baseline(), "104177");
        for colour in COLOURS {
            assert_eq!(status(&state, colour), status(&state, colour));
        }
    }

    /// T3.3: Building a bundle: children first, then the bundle itself.
    #[test]
    fn bundle_assembly() {
        let state = state_from(vec![
            CatalogEntry::new("tech", "RA", "tech-pack", true, "Technology pack"),
            CatalogEntry::new("tech", "RA", "nav", false, "Navigation"),
            CatalogEntry::new("tech", "RA", "hud", false, "Head-up display"),
            CatalogEntry::new("audio", "OO", "hifi", false, "Hi-fi"),
            CatalogEntry::new("audio", "OO", "basic", false, "Basic audio"),
        ]);

        let state = select(&state, "nav");
        assert_eq!(status(&state, "tech-pack"), Status::Disabled);

        let state = select(&state, "hud");
        assert_eq!(status(&state, "tech-pack"), Status::Available);

        let state = select(&state, "tech-pack");
        let state = select(&state, "hifi");
        assert_eq!(status(&state, "basic"), Status::Disabled);
        assert_eq!(state.selected(), &[id("nav"), id("hud"), id("tech-pack"), id("hifi")]);

        // Removing a part re-locks the bundle, but it stays SELECTED
        let state = deselect(&state, "hud");
        assert_eq!(status(&state, "tech-pack"), Status::Selected);
        assert!(SelectionEngine::is_disabled(&state, &id("tech-pack")).expect("query"));
    }
}
