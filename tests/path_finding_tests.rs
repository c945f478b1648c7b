use routing_sssp::algorithm::{path_cost, ShortestPathAlgorithm};
use routing_sssp::graph::sample::{sample_topology, SAMPLE_NODES};
use routing_sssp::graph::{AdjacencyMatrix, Graph, MutableGraph};
use routing_sssp::{BellmanFord, Dijkstra, Error};

// Test the sample topology from router A
#[test]
fn test_sample_topology_from_a() {
    let graph = sample_topology().unwrap();

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    let expected = vec![Some(0), Some(3), Some(2), Some(8), Some(10)];
    assert_eq!(dijkstra.distances, expected);
    assert_eq!(bellman_ford.distances, expected);

    assert_eq!(dijkstra.path_to(1), Some(vec![0, 2, 1]));
    assert_eq!(dijkstra.path_to(2), Some(vec![0, 2]));
    assert_eq!(dijkstra.path_to(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(dijkstra.path_to(4), Some(vec![0, 2, 1, 3, 4]));
    assert_eq!(bellman_ford.path_to(4), Some(vec![0, 2, 1, 3, 4]));
}

// Test that both engines agree from every router and paths add up to the distance
#[test]
fn test_sample_topology_every_source() {
    let graph = sample_topology().unwrap();

    for source in 0..SAMPLE_NODES {
        let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, source).unwrap();

        assert_eq!(dijkstra.distances, bellman_ford.distances, "engines disagree from {}", source);
        assert_eq!(dijkstra.distance(source), Some(0));
        assert_eq!(dijkstra.predecessors[source], None);
        assert_eq!(bellman_ford.predecessors[source], None);

        for result in [&dijkstra, &bellman_ford] {
            for target in 0..SAMPLE_NODES {
                let path = result.path_to(target).expect("sample topology is connected");
                assert_eq!(path[0], source, "Path should start at source");
                assert_eq!(path[path.len() - 1], target, "Path should end at target");
                assert_eq!(path_cost(&graph, &path), result.distance(target));
            }
        }
    }
}

#[test]
fn test_sample_topology_from_e() {
    let graph = sample_topology().unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 4).unwrap();

    assert_eq!(result.distances, vec![Some(10), Some(7), Some(8), Some(2), Some(0)]);
    assert_eq!(result.path_to(0), Some(vec![4, 3, 1, 2, 0]));
}

// Equal-cost routes keep the predecessor found through the lowest vertex ID
#[test]
fn test_ties_prefer_lowest_vertex() {
    let mut graph = AdjacencyMatrix::with_vertices(4);
    graph.add_edge(0, 1, 1);
    graph.add_edge(0, 2, 1);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 3, 1);

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(dijkstra.predecessors[3], Some(1));
    assert_eq!(bellman_ford.predecessors[3], Some(1));
    assert_eq!(dijkstra.distance(3), Some(2));
}

// Unreachable routers have no distance, and their raw chain is just themselves
#[test]
fn test_unreachable_vertex() {
    let mut graph = AdjacencyMatrix::with_vertices(3);
    graph.add_edge(0, 1, 3);
    graph.add_edge(2, 0, 1);

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distance(1), Some(3));
        assert!(!result.is_reachable(2));
        assert_eq!(result.predecessors[2], None);
        assert_eq!(result.reconstruct_path(2), vec![2]);
        assert_eq!(result.path_to(2), None);
    }
}

// A zero weight is a real link once edges are added explicitly
#[test]
fn test_zero_weight_edges() {
    let mut graph = AdjacencyMatrix::with_vertices(3);
    graph.add_edge(0, 1, 0);
    graph.add_edge(1, 2, 0);
    graph.add_edge(0, 2, 5);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(0), Some(0)]);
    assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));

    let legacy = AdjacencyMatrix::from_rows(&[[0, 0, 5], [0, 0, 0], [0, 0, 0]]).unwrap();
    assert_eq!(legacy.edge_count(), 1);
    let result = Dijkstra::new().compute_shortest_paths(&legacy, 0).unwrap();
    assert_eq!(result.distance(1), None);
}

#[test]
fn test_unsigned_weights() {
    let mut graph: AdjacencyMatrix<u32> = AdjacencyMatrix::with_vertices(3);
    graph.add_link(0, 1, 15);
    graph.add_link(1, 2, 2);
    graph.add_link(0, 2, 20);

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(dijkstra.distance(2), Some(17));
    assert_eq!(dijkstra.distances, bellman_ford.distances);
}

// A route whose cost does not fit the weight type is an error, not a panic
#[test]
fn test_distance_overflow_is_reported() {
    let mut graph = AdjacencyMatrix::with_vertices(3);
    graph.add_edge(0, 1, i64::MAX);
    graph.add_edge(1, 2, 1);

    let err = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::DistanceOverflow { from: 1, to: 2 }));
    let err = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::DistanceOverflow { from: 1, to: 2 }));

    assert_eq!(path_cost(&graph, &[0, 1, 2]), None);
    assert_eq!(path_cost(&graph, &[0, 1]), Some(i64::MAX));
}

// An overflowing detour never beats a route that is already known
#[test]
fn test_overflowing_detour_is_skipped() {
    let mut graph = AdjacencyMatrix::with_vertices(3);
    graph.add_edge(0, 1, i64::MAX);
    graph.add_edge(1, 2, 1);
    graph.add_edge(0, 2, 5);

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distances, vec![Some(0), Some(i64::MAX), Some(5)]);
        assert_eq!(result.path_to(2), Some(vec![0, 2]));
    }
}

#[test]
fn test_source_out_of_range() {
    let graph = sample_topology().unwrap();

    let err = Dijkstra::new().compute_shortest_paths(&graph, SAMPLE_NODES).unwrap_err();
    assert!(matches!(err, Error::InvalidVertex(5)));
    let err = BellmanFord::new().compute_shortest_paths(&graph, SAMPLE_NODES).unwrap_err();
    assert!(matches!(err, Error::InvalidVertex(5)));
}

#[test]
fn test_single_vertex_graph() {
    let graph: AdjacencyMatrix<i64> = AdjacencyMatrix::with_vertices(1);
    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0)]);
    assert_eq!(result.path_to(0), Some(vec![0]));
}
