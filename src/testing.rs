//! Fixtures and brute-force reference implementations shared by the unit tests.

use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// Means of transport between two stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Bus,
    Rail,
}

/// Small transit network with travel times in minutes.
///
/// Returns the graph and the stations `[central, harbor, airport, university, stadium]`.
/// Central and harbor are connected by three parallel lines, exactly one of them by rail.
pub fn transport_network() -> (Digraph<&'static str, Mode, u32>, [VertexId; 5]) {
    let mut g = Digraph::new();
    let central = g.add_vertex("central");
    let harbor = g.add_vertex("harbor");
    let airport = g.add_vertex("airport");
    let university = g.add_vertex("university");
    let stadium = g.add_vertex("stadium");

    for (u, v, mode, minutes) in [
        (central, harbor, Mode::Bus, 55),
        (central, harbor, Mode::Rail, 40),
        (central, harbor, Mode::Bus, 60),
        (central, university, Mode::Bus, 15),
        (harbor, airport, Mode::Rail, 25),
        (harbor, airport, Mode::Bus, 30),
        (university, harbor, Mode::Rail, 20),
        (university, stadium, Mode::Rail, 10),
        (stadium, airport, Mode::Bus, 40),
        (airport, central, Mode::Rail, 50),
    ] {
        g.add_weighted_edge(u, v, mode, minutes);
    }

    (g, [central, harbor, airport, university, stadium])
}

/// The dependencies of getting dressed in the morning; every vertex carries its item name.
pub fn clothing() -> (Digraph<&'static str, ()>, [&'static str; 9]) {
    let names = [
        "shirt",
        "watch",
        "undershorts",
        "tie",
        "jacket",
        "belt",
        "pants",
        "shoes",
        "socks",
    ];

    let mut g = Digraph::new();
    for name in names {
        g.add_vertex(name);
    }

    let id = |item: &str| names.iter().position(|&x| x == item).unwrap() as VertexId;
    for (before, after) in [
        ("undershorts", "pants"),
        ("undershorts", "shoes"),
        ("pants", "belt"),
        ("pants", "shoes"),
        ("belt", "jacket"),
        ("shirt", "belt"),
        ("shirt", "tie"),
        ("tie", "jacket"),
        ("socks", "shoes"),
    ] {
        g.add_edge(id(before), id(after), ());
    }

    (g, names)
}

/// Returns *true* if `order` is a permutation of all vertices and every arc points forward
pub fn is_topological_order<G: AdjacencyList>(graph: &G, order: &[VertexId]) -> bool {
    if order.len() != graph.len() || !order.iter().all_unique() {
        return false;
    }

    let mut position = vec![usize::MAX; graph.len()];
    for (i, &u) in order.iter().enumerate() {
        position[u as usize] = i;
    }

    graph
        .arcs()
        .all(|Arc(u, v)| position[u as usize] < position[v as usize])
}

/// Cycle check by repeatedly removing vertices without incoming arcs
pub fn kahn_is_acyclic<G: AdjacencyList>(graph: &G) -> bool {
    let mut in_degs = graph.in_degrees();
    let mut sources = graph
        .vertices_range()
        .filter(|&u| in_degs[u as usize] == 0)
        .collect_vec();

    let mut removed = 0;
    while let Some(u) = sources.pop() {
        removed += 1;
        for v in graph.out_neighbors_of(u) {
            in_degs[v as usize] -= 1;
            if in_degs[v as usize] == 0 {
                sources.push(v);
            }
        }
    }

    removed == graph.len()
}

/// All-pairs edge distances via Floyd-Warshall
pub fn naive_hop_distances<G: AdjacencyList>(graph: &G) -> Vec<Vec<Distance>> {
    let n = graph.len();
    let mut dist = vec![vec![INFINITE_DISTANCE; n]; n];
    for u in 0..n {
        dist[u][u] = 0;
    }
    for Arc(u, v) in graph.arcs().filter(|a| !a.is_loop()) {
        dist[u as usize][v as usize] = 1;
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] != INFINITE_DISTANCE && dist[k][j] != INFINITE_DISTANCE {
                    dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                }
            }
        }
    }

    dist
}

/// All-pairs minimum weights via Floyd-Warshall; `None` if unreachable.
/// The graph must not contain negative-weight cycles.
pub fn naive_weighted_distances<G>(graph: &G) -> Vec<Vec<Option<i64>>>
where
    G: WeightedAdjacencyList,
    G::Weight: Into<i64>,
{
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        dist[u][u] = Some(0);
    }
    for u in graph.vertices_range() {
        for (v, w) in graph.weighted_out_neighbors_of(u) {
            let w: i64 = w.into();
            let cell = &mut dist[u as usize][v as usize];
            *cell = Some(cell.map_or(w, |d: i64| d.min(w)));
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    dist[i][j] = Some(dist[i][j].map_or(a + b, |d: i64| d.min(a + b)));
                }
            }
        }
    }

    dist
}
