use similarity_graph::{Edge, GraphError, WeightedGraph};

/// Complete undirected graph with deterministic weights in (0, 1]
fn complete_graph(n: usize) -> WeightedGraph<String> {
    let mut graph = WeightedGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(format!("v{i}"));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let w = ((i * 7 + j * 13) % 17 + 1) as f64 / 17.0;
            graph.add_edge(i, j, w).unwrap();
            graph.add_edge(j, i, w).unwrap();
        }
    }
    graph
}

#[test]
fn test_degree_counts_successful_adds() {
    let mut graph = WeightedGraph::from_edges(0..3, Vec::new()).unwrap();
    let attempts = [
        (0, 1, 0.5, true),
        (0, 1, 0.5, false),
        (0, 1, 0.6, true),
        (0, 2, 0.1, true),
    ];
    for (u, v, w, added) in attempts {
        assert_eq!(graph.add_edge(u, v, w), Ok(added));
    }
    assert_eq!(graph.degree(0), Ok(3));
    assert_eq!(graph.neighbors(0).unwrap().count(), 3);
    assert_eq!(graph.degree(1), Ok(0));
}

#[test]
fn test_weights_read_back() {
    let graph = complete_graph(12);
    for u in 0..12 {
        for edge in graph.edges(u).unwrap() {
            assert_eq!(graph.weight(edge.u, edge.v), Ok(edge.weight));
            assert_eq!(graph.weight(edge.v, edge.u), Ok(edge.weight));
        }
        assert_eq!(graph.weight(u, u), Err(GraphError::EdgeNotFound { u, v: u }));
    }
}

#[test]
fn test_mst_spans_connected_graph() {
    let graph = complete_graph(20);
    let mst = graph.minimum_spanning_tree(0).unwrap();

    assert_eq!(mst.vertices_found(), 20);

    // every non-root vertex hangs off an earlier vertex, and the parent
    // edges add up to the reported total
    let mut sum = 0.0;
    for v in 1..20 {
        let p = mst.parent(v).unwrap();
        sum += graph.weight(p, v).unwrap();
        assert_eq!(*mst.path(v).last().unwrap(), 0);
    }
    assert!((sum - mst.total_weight()).abs() < 1e-9);
}

#[test]
fn test_mst_is_no_heavier_than_any_star() {
    let graph = complete_graph(15);
    let mst = graph.minimum_spanning_tree(0).unwrap();

    for centre in 0..15 {
        let star: f64 = (0..15)
            .filter(|&v| v != centre)
            .map(|v| graph.weight(centre, v).unwrap())
            .sum();
        assert!(mst.total_weight() <= star + 1e-9);
    }
}

#[test]
fn test_shortest_paths_obey_triangle_inequality() {
    let graph = complete_graph(15);
    let spt = graph.shortest_paths(3).unwrap();

    for u in 0..15 {
        for edge in graph.edges(u).unwrap() {
            assert!(spt.cost(edge.v) <= spt.cost(edge.u) + edge.weight + 1e-9);
        }
        // cost equals the sum of weights along the reported path
        let path = spt.path(u);
        let along: f64 = path.windows(2).map(|w| graph.weight(w[1], w[0]).unwrap()).sum();
        assert!((along - spt.cost(u)).abs() < 1e-9);
    }
}

#[test]
fn test_dfs_and_bfs_reach_everything_in_complete_graph() {
    let graph = complete_graph(8);

    let dfs = graph.dfs(2).unwrap();
    let bfs = graph.bfs(2).unwrap();
    assert_eq!(dfs.vertices_found(), 8);
    assert_eq!(bfs.vertices_found(), 8);

    // in a complete graph DFS goes deep: a chain through every vertex
    assert_eq!(dfs.path(*dfs.search_order().last().unwrap()).len(), 8);
    // while BFS stays one hop from the root
    for v in (0..8).filter(|&v| v != 2) {
        assert_eq!(bfs.parent(v), Some(2));
    }
}

#[test]
fn test_from_edges_validates() {
    let result = WeightedGraph::from_edges(["a", "b"], [Edge::new(0, 2, 1.0)]);
    assert_eq!(result.unwrap_err(), GraphError::InvalidIndex { index: 2, size: 2 });
}
