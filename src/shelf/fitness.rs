//! Placement-rule penalty evaluator.
//!
//! Ten independent rules, summed. A product can trip several rules at
//! once, and shelves with nothing on them contribute nothing.
//!
//! | Rule | Trigger | Penalty |
//! |------|---------|---------|
//! | Capacity | shelf load > capacity | 10 × overflow |
//! | High-demand access | high-demand product on inaccessible shelf | 20 |
//! | Category segmentation | a category on n > 1 shelves | 5 × (n − 1) |
//! | Refrigeration | refrigerated product off a refrigerated shelf | 30 |
//! | Hazard separation | hazardous product off a hazardous shelf | 30 |
//! | Compatibility | a compatibility group on n > 1 shelves | 10 × (n − 1) |
//! | Bulky restocking | bulky product off a lower shelf | 15 |
//! | Refrigerated consolidation | refrigerated products on n > 1 fridge shelves | 5 × (n − 1) |
//! | Promotional visibility | promotional product on inaccessible shelf | 20 |
//! | Theft security | expensive product on non-secure shelf | 25 |
//!
//! Consolidation only counts refrigerated-type shelves actually holding a
//! refrigerated product; a misplaced refrigerated product is already charged
//! by the refrigeration rule.

use super::assignment::Assignment;
use crate::catalog::{Catalog, ShelfType};
use serde::Serialize;
use std::fmt;

const CAPACITY_PER_UNIT: f64 = 10.0;
const HIGH_DEMAND_ACCESS: f64 = 20.0;
const CATEGORY_PER_EXTRA_SHELF: f64 = 5.0;
const REFRIGERATION: f64 = 30.0;
const HAZARD: f64 = 30.0;
const COMPAT_PER_EXTRA_SHELF: f64 = 10.0;
const BULKY_LOWER: f64 = 15.0;
const FRIDGE_PER_EXTRA_SHELF: f64 = 5.0;
const PROMO_VISIBILITY: f64 = 20.0;
const THEFT_SECURITY: f64 = 25.0;

/// A placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Capacity,
    HighDemandAccess,
    CategorySegmentation,
    Refrigeration,
    HazardSeparation,
    Compatibility,
    BulkyRestocking,
    RefrigeratedConsolidation,
    PromotionalVisibility,
    TheftSecurity,
}

impl Rule {
    pub const ALL: [Rule; 10] = [
        Rule::Capacity,
        Rule::HighDemandAccess,
        Rule::CategorySegmentation,
        Rule::Refrigeration,
        Rule::HazardSeparation,
        Rule::Compatibility,
        Rule::BulkyRestocking,
        Rule::RefrigeratedConsolidation,
        Rule::PromotionalVisibility,
        Rule::TheftSecurity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Capacity => "capacity",
            Rule::HighDemandAccess => "high-demand access",
            Rule::CategorySegmentation => "category segmentation",
            Rule::Refrigeration => "refrigeration",
            Rule::HazardSeparation => "hazard separation",
            Rule::Compatibility => "compatibility",
            Rule::BulkyRestocking => "bulky restocking",
            Rule::RefrigeratedConsolidation => "refrigerated consolidation",
            Rule::PromotionalVisibility => "promotional visibility",
            Rule::TheftSecurity => "theft security",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Penalty and violation count per rule.
///
/// A violation is one triggering unit: an overloaded shelf, a misplaced
/// product, or a spread category/group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenaltyBreakdown {
    penalties: [f64; 10],
    violations: [usize; 10],
}

impl PenaltyBreakdown {
    fn charge(&mut self, rule: Rule, amount: f64) {
        self.penalties[rule.slot()] += amount;
        self.violations[rule.slot()] += 1;
    }

    /// Sum over all rules. Never negative.
    pub fn total(&self) -> f64 {
        self.penalties.iter().sum()
    }

    pub fn penalty(&self, rule: Rule) -> f64 {
        self.penalties[rule.slot()]
    }

    pub fn violations(&self, rule: Rule) -> usize {
        self.violations[rule.slot()]
    }

    /// Rules with at least one violation, with their count and penalty.
    pub fn violated(&self) -> impl Iterator<Item = (Rule, usize, f64)> + '_ {
        Rule::ALL
            .into_iter()
            .filter(|r| self.violations(*r) > 0)
            .map(|r| (r, self.violations(r), self.penalty(r)))
    }
}

/// Total penalty of `assignment`. Zero means every rule holds.
pub fn evaluate(assignment: &Assignment, catalog: &Catalog) -> f64 {
    breakdown(assignment, catalog).total()
}

/// Per-rule penalties of `assignment`.
///
/// Single pass over products, then one pass over shelves and groupings.
pub fn breakdown(assignment: &Assignment, catalog: &Catalog) -> PenaltyBreakdown {
    let products = catalog.products();
    let shelves = catalog.shelves();
    let n_shelves = shelves.len();

    let mut b = PenaltyBreakdown::default();
    let mut load = vec![0.0; n_shelves];
    let mut category_spread = Spread::new(catalog.categories().len(), n_shelves);
    let mut group_spread = Spread::new(catalog.groups().len(), n_shelves);
    let mut fridge_spread = Spread::new(1, n_shelves);

    for (p, product) in products.iter().enumerate() {
        let s = assignment.shelf_of(p);
        let shelf = &shelves[s];
        load[s] += product.weight;

        category_spread.mark(catalog.category_of(p), s);
        if let Some(g) = catalog.group_of(p) {
            group_spread.mark(g, s);
        }

        if product.high_demand && !shelf.accessible {
            b.charge(Rule::HighDemandAccess, HIGH_DEMAND_ACCESS);
        }
        if product.refrigerated {
            if shelf.shelf_type == ShelfType::Refrigerated {
                fridge_spread.mark(0, s);
            } else {
                b.charge(Rule::Refrigeration, REFRIGERATION);
            }
        }
        if product.hazardous && shelf.shelf_type != ShelfType::Hazardous {
            b.charge(Rule::HazardSeparation, HAZARD);
        }
        if product.bulky && shelf.shelf_type != ShelfType::Lower {
            b.charge(Rule::BulkyRestocking, BULKY_LOWER);
        }
        if product.promotional && !shelf.accessible {
            b.charge(Rule::PromotionalVisibility, PROMO_VISIBILITY);
        }
        if product.expensive && !shelf.secure {
            b.charge(Rule::TheftSecurity, THEFT_SECURITY);
        }
    }

    for (shelf, &weight) in shelves.iter().zip(&load) {
        if weight > shelf.capacity {
            b.charge(Rule::Capacity, CAPACITY_PER_UNIT * (weight - shelf.capacity));
        }
    }
    for extra in category_spread.extra_shelves() {
        b.charge(Rule::CategorySegmentation, CATEGORY_PER_EXTRA_SHELF * extra as f64);
    }
    for extra in group_spread.extra_shelves() {
        b.charge(Rule::Compatibility, COMPAT_PER_EXTRA_SHELF * extra as f64);
    }
    for extra in fridge_spread.extra_shelves() {
        b.charge(Rule::RefrigeratedConsolidation, FRIDGE_PER_EXTRA_SHELF * extra as f64);
    }

    b
}

/// Distinct-shelf counter per group (category, compatibility group, …).
struct Spread {
    n_shelves: usize,
    seen: Vec<bool>,
    distinct: Vec<usize>,
}

impl Spread {
    fn new(groups: usize, n_shelves: usize) -> Self {
        Self {
            n_shelves,
            seen: vec![false; groups * n_shelves],
            distinct: vec![0; groups],
        }
    }

    fn mark(&mut self, group: usize, shelf: usize) {
        let cell = &mut self.seen[group * self.n_shelves + shelf];
        if !*cell {
            *cell = true;
            self.distinct[group] += 1;
        }
    }

    /// `distinct − 1` for every group spread over more than one shelf.
    fn extra_shelves(&self) -> impl Iterator<Item = usize> + '_ {
        self.distinct.iter().filter(|&&n| n > 1).map(|&n| n - 1)
    }
}
