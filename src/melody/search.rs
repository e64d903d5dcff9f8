//! Melodic shortest path — Dijkstra over the complete graph of scale positions.

use tracing::debug;

use super::scale::ScaleType;

/// Cost of moving between two scale positions.
///
/// One step costs 1.0, two steps 1.5, and anything larger a flat 3.0 so wide
/// leaps are discouraged without being forbidden. Distance is linear in the
/// scale index; there is no wraparound at the octave.
pub fn step_cost(from: usize, to: usize) -> f64 {
    match from.abs_diff(to) {
        1 => 1.0,
        2 => 1.5,
        _ => 3.0,
    }
}

/// Total step cost of a path of in-scale notes, or `None` if any note is not
/// in the scale.
pub fn path_cost(scale: ScaleType, path: &[String]) -> Option<f64> {
    let indices = path
        .iter()
        .map(|note| scale.index_of(note))
        .collect::<Option<Vec<_>>>()?;
    Some(indices.windows(2).map(|w| step_cost(w[0], w[1])).sum())
}

/// Find the cheapest melodic path from `start` to `end` within `scale`.
///
/// If either note is not in the scale, returns `[start, end]` unchanged.
/// When several unvisited notes share the smallest tentative distance, the one
/// with the lowest scale index is taken first; among equal-cost paths the
/// first one discovered is kept.
pub fn find_melody(start: &str, end: &str, scale: ScaleType) -> Vec<String> {
    let notes = scale.notes();
    let (Some(start_idx), Some(end_idx)) = (scale.index_of(start), scale.index_of(end)) else {
        debug!(start, end, scale = scale.name(), "note outside scale");
        return vec![start.to_string(), end.to_string()];
    };

    let n = notes.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[start_idx] = 0.0;

    while let Some(current) = closest_unvisited(&dist, &visited) {
        if current == end_idx {
            break;
        }
        visited[current] = true;

        for next in 0..n {
            if visited[next] {
                continue;
            }
            let alt = dist[current] + step_cost(current, next);
            if alt < dist[next] {
                dist[next] = alt;
                prev[next] = Some(current);
            }
        }
    }

    let mut indices = vec![end_idx];
    while let Some(p) = indices.last().and_then(|&i| prev[i]) {
        indices.push(p);
    }
    indices.reverse();

    let mut path: Vec<String> = indices.iter().map(|&i| notes[i].to_string()).collect();
    if indices.first() != Some(&start_idx) {
        path.insert(0, start.to_string());
    }
    debug!(cost = dist[end_idx], ?path, "melody found");
    path
}

/// Unvisited index with the smallest distance, lowest index on ties.
fn closest_unvisited(dist: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, d) in dist.iter().enumerate() {
        if visited[i] {
            continue;
        }
        match best {
            Some(b) if dist[b] <= *d => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn notes(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn step_costs() {
        assert_approx_eq!(step_cost(0, 1), 1.0);
        assert_approx_eq!(step_cost(3, 1), 1.5);
        assert_approx_eq!(step_cost(0, 3), 3.0);
        assert_approx_eq!(step_cost(6, 0), 3.0);
    }

    #[test]
    fn same_note_is_single_element() {
        assert_eq!(find_melody("C", "C", ScaleType::Major), notes(&["C"]));
    }

    #[test]
    fn two_step_hop_beats_two_single_steps() {
        // C -> E directly costs 1.5; C -> D -> E costs 2.0.
        let path = find_melody("C", "E", ScaleType::Major);
        assert_eq!(path, notes(&["C", "E"]));
        assert_approx_eq!(path_cost(ScaleType::Major, &path).unwrap(), 1.5);
    }

    #[test]
    fn wide_leap_taken_directly() {
        assert_eq!(find_melody("C", "G", ScaleType::Major), notes(&["C", "G"]));
    }

    #[test]
    fn three_step_leap_is_split() {
        // C -> F directly costs 3.0; C -> D -> F costs 2.5.
        let path = find_melody("C", "F", ScaleType::Major);
        assert_eq!(path, notes(&["C", "D", "F"]));
        assert_approx_eq!(path_cost(ScaleType::Major, &path).unwrap(), 2.5);
    }

    #[test]
    fn descending_path() {
        let path = find_melody("A", "F", ScaleType::Major);
        assert_eq!(path, notes(&["A", "F"]));
    }

    #[test]
    fn no_octave_wraparound() {
        // B and C are six positions apart in the linear scale.
        let path = find_melody("B", "C", ScaleType::Major);
        assert_eq!(path, notes(&["B", "C"]));
        assert_approx_eq!(path_cost(ScaleType::Major, &path).unwrap(), 3.0);
    }

    #[test]
    fn uses_the_requested_scale() {
        assert_eq!(
            find_melody("Eb", "Bb", ScaleType::Minor),
            notes(&["Eb", "Bb"])
        );
        assert_eq!(
            find_melody("D", "A", ScaleType::Dorian),
            notes(&["D", "A"])
        );
    }

    #[test]
    fn note_outside_scale_returns_endpoints() {
        assert_eq!(find_melody("X", "C", ScaleType::Major), notes(&["X", "C"]));
        // Bb is not in C major.
        assert_eq!(
            find_melody("C", "Bb", ScaleType::Major),
            notes(&["C", "Bb"])
        );
    }

    #[test]
    fn result_is_minimal_for_every_pair() {
        for scale in ScaleType::ALL {
            for (i, &a) in scale.notes().iter().enumerate() {
                for (j, &b) in scale.notes().iter().enumerate() {
                    let path = find_melody(a, b, scale);
                    assert_eq!(path.first().map(String::as_str), Some(a));
                    assert_eq!(path.last().map(String::as_str), Some(b));
                    let cost = path_cost(scale, &path).unwrap();
                    let expected = match i.abs_diff(j) {
                        0 => 0.0,
                        1 => 1.0,
                        2 => 1.5,
                        3 => 2.5,
                        _ => 3.0,
                    };
                    assert_approx_eq!(cost, expected);
                }
            }
        }
    }

    #[test]
    fn path_cost_rejects_foreign_notes() {
        assert_eq!(path_cost(ScaleType::Major, &notes(&["C", "Eb"])), None);
        assert_eq!(path_cost(ScaleType::Major, &notes(&["C"])), Some(0.0));
    }
}
