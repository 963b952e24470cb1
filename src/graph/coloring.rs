//! Greedy node coloring.

use super::core::Graph;

impl Graph {
    /// An upper bound on the chromatic number: the number of colors a
    /// greedy pass ends up with when it assigns each node, in insertion
    /// order, preferring to reuse the least-used color not taken by an
    /// adjacent node (falling back to the second-least-used) before
    /// opening a new one.
    ///
    /// This is a documented heuristic, not an exact chromatic number; its
    /// tie-breaking is part of the contract.
    pub fn chromatic_number(&self) -> usize {
        if self.nodes().is_empty() {
            return 0;
        }

        // color index -> node IDs wearing that color
        let mut colors: Vec<Vec<String>> = vec![vec![self.nodes()[0].id().to_string()]];
        let mut color_idx = 0;

        for node in &self.nodes()[1..] {
            let adjacent: Vec<String> = node
                .adjacent_ids()
                .iter()
                .map(|id| id.to_string())
                .collect();

            if all_colors_used(&adjacent, &colors) {
                color_idx += 1;
                assign_alone(&mut colors, color_idx, node.id());
            } else {
                color_idx = least_used_color(&colors);

                if any_adjacent_wearing(&adjacent, &colors, color_idx) {
                    if colors.len() < 2 {
                        color_idx += 1;
                        assign_alone(&mut colors, color_idx, node.id());
                    } else {
                        color_idx = second_least_used_color(&colors);
                        colors[color_idx].push(node.id().to_string());
                    }
                } else {
                    colors[color_idx].push(node.id().to_string());
                }
            }
        }

        colors.len()
    }
}

fn is_colored(id: &str, colors: &[Vec<String>]) -> bool {
    colors.iter().any(|ids| ids.iter().any(|held| held == id))
}

// Counts colored adjacent occurrences (duplicates included) against the
// number of colors in play.
fn all_colors_used(adjacent: &[String], colors: &[Vec<String>]) -> bool {
    adjacent.iter().filter(|id| is_colored(id, colors)).count() == colors.len()
}

fn any_adjacent_wearing(adjacent: &[String], colors: &[Vec<String>], color_idx: usize) -> bool {
    adjacent
        .iter()
        .any(|id| colors[color_idx].iter().any(|held| held == id))
}

// Ties break towards the lower color index.
fn least_used_color(colors: &[Vec<String>]) -> usize {
    let mut ranked: Vec<(usize, usize)> = colors
        .iter()
        .enumerate()
        .map(|(idx, ids)| (ids.len(), idx))
        .collect();
    ranked.sort();
    ranked[0].1
}

fn second_least_used_color(colors: &[Vec<String>]) -> usize {
    let mut ranked: Vec<(usize, usize)> = colors
        .iter()
        .enumerate()
        .map(|(idx, ids)| (ids.len(), idx))
        .collect();
    ranked.sort();
    ranked[1].1
}

// Start (or restart) a color holding just the given node.
fn assign_alone(colors: &mut Vec<Vec<String>>, color_idx: usize, id: &str) {
    if color_idx == colors.len() {
        colors.push(vec![id.to_string()]);
    } else {
        colors[color_idx] = vec![id.to_string()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_used_color_breaks_ties_towards_lower_index() {
        let colors = vec![
            vec!["a".to_string()],
            vec!["b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ];
        assert_eq!(least_used_color(&colors), 0);
        assert_eq!(second_least_used_color(&colors), 1);
    }

    #[test]
    fn test_all_colors_used_counts_occurrences() {
        let colors = vec![vec!["a".to_string()], vec!["b".to_string()]];
        let adjacent = vec!["a".to_string(), "b".to_string()];
        assert!(all_colors_used(&adjacent, &colors));

        let adjacent = vec!["a".to_string(), "z".to_string()];
        assert!(!all_colors_used(&adjacent, &colors));
    }
}
