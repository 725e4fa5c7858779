//! Compatibility and power evaluation.
//!
//! A pure pass over the full selection map. It is re-run from scratch
//! after every mutation; selections are a handful of items, so full
//! recomputation stays cheap and no stale-issue state can accumulate.

use crate::model::{category, BuilderItem, SelectionMap};

/// PSU headroom below which a warning is emitted, in watts.
const PSU_HEADROOM_W: u32 = 100;

/// Result of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Deduplicated advisory messages, in first-seen order.
    pub issues: Vec<String>,
    /// Estimated total draw in watts, power supplies excluded.
    pub wattage: u32,
}

/// Evaluates the selection: total power draw and compatibility issues.
///
/// Issues never block a mutation; consumers decide whether "Critical" or
/// "Incompatible" entries gate checkout.
#[must_use]
pub fn evaluate(selection: &SelectionMap) -> Evaluation {
    let wattage = estimated_draw(selection);
    let mut issues = Vec::new();

    check_psu(selection, wattage, &mut issues);
    check_socket(selection, &mut issues);
    check_memory_type(selection, &mut issues);

    dedup_in_order(&mut issues);
    Evaluation { issues, wattage }
}

/// Sum of `wattage × quantity` over every category except the power
/// supply, whose wattage spec means capacity rather than draw. Parts
/// without a wattage spec contribute 0.
fn estimated_draw(selection: &SelectionMap) -> u32 {
    selection
        .iter()
        .filter(|(cat, _)| cat.as_str() != category::POWER_SUPPLY)
        .flat_map(|(_, items)| items)
        .map(|item| item.product.specs.wattage.unwrap_or(0) * item.quantity)
        .sum()
}

/// Emits nothing when no PSU is selected; callers may warn independently.
fn check_psu(selection: &SelectionMap, draw: u32, issues: &mut Vec<String>) {
    let Some(psu) = first_in(selection, category::POWER_SUPPLY) else {
        return;
    };
    let capacity = psu.product.specs.wattage.unwrap_or(0);

    if draw > capacity {
        issues.push(format!(
            "Critical: estimated draw {draw}W exceeds the {}W capacity of {} by {}W",
            capacity,
            psu.product.name,
            draw - capacity
        ));
    } else if draw > 0 && capacity - draw < PSU_HEADROOM_W {
        issues.push(format!(
            "Warning: only {}W of headroom left on {} ({draw}W draw / {capacity}W capacity)",
            capacity - draw,
            psu.product.name
        ));
    }
}

/// Two-way substring containment: each socket string must contain or be
/// contained by the other. This is a deliberate heuristic, tolerant of
/// superset spellings like "LGA1700 (Raptor Lake)"; it is not a
/// compatibility database and is kept as-is.
fn sockets_fit(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn check_socket(selection: &SelectionMap, issues: &mut Vec<String>) {
    let (Some(cpu), Some(board)) = (
        first_in(selection, category::PROCESSORS),
        first_in(selection, category::MOTHERBOARDS),
    ) else {
        return;
    };
    let (Some(cpu_socket), Some(board_socket)) =
        (&cpu.product.specs.socket, &board.product.specs.socket)
    else {
        return;
    };

    if !sockets_fit(cpu_socket, board_socket) {
        issues.push(format!(
            "Incompatible: {} (socket {cpu_socket}) does not fit {} (socket {board_socket})",
            cpu.product.name, board.product.name
        ));
    }
}

fn check_memory_type(selection: &SelectionMap, issues: &mut Vec<String>) {
    let Some(board) = first_in(selection, category::MOTHERBOARDS) else {
        return;
    };
    let Some(board_type) = &board.product.specs.memory_type else {
        return;
    };
    let Some(sticks) = selection.get(category::MEMORY) else {
        return;
    };

    for stick in sticks {
        if let Some(stick_type) = &stick.product.specs.memory_type {
            if stick_type != board_type {
                issues.push(format!(
                    "Incompatible: {} is {stick_type} but {} takes {board_type}",
                    stick.product.name, board.product.name
                ));
            }
        }
    }
}

fn first_in<'a>(selection: &'a SelectionMap, cat: &str) -> Option<&'a BuilderItem> {
    selection.get(cat).and_then(|items| items.first())
}

fn dedup_in_order(issues: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    issues.retain(|issue| seen.insert(issue.clone()));
}
