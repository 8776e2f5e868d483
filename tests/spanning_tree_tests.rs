use std::collections::{HashMap, HashSet};

use graph_algos::{minimum_spanning_tree, Distance, Edge, Error, Graph, Vertex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn diamond_graph() -> (Graph<char>, Vec<Vertex<char>>) {
    let mut graph = Graph::new();
    let a = graph.add_vertex('A');
    let b = graph.add_vertex('B');
    let c = graph.add_vertex('C');
    let d = graph.add_vertex('D');

    graph.add_undirected_edge(&a, &b, 1);
    graph.add_undirected_edge(&a, &c, 4);
    graph.add_undirected_edge(&b, &c, 2);
    graph.add_undirected_edge(&c, &d, 1);

    (graph, vec![a, b, c, d])
}

/// Path-compressing union-find over vertex data; `union` returns false when
/// both vertices were already in the same component.
struct UnionFind<T> {
    parent: HashMap<T, T>,
}

impl<T: Clone + Eq + std::hash::Hash> UnionFind<T> {
    fn new(items: impl Iterator<Item = T>) -> Self {
        UnionFind {
            parent: items.map(|i| (i.clone(), i)).collect(),
        }
    }

    fn find(&mut self, item: &T) -> T {
        let parent = self.parent[item].clone();
        if parent == *item {
            return parent;
        }
        let root = self.find(&parent);
        self.parent.insert(item.clone(), root.clone());
        root
    }

    fn union(&mut self, a: &T, b: &T) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent.insert(ra, rb);
        true
    }
}

fn assert_spanning_and_acyclic<T>(tree: &HashSet<Edge<T>>, graph: &Graph<T>)
where
    T: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    assert_eq!(tree.len(), graph.vertex_count() - 1);

    let mut components = UnionFind::new(graph.vertices().map(|v| v.data().clone()));
    for edge in tree {
        assert!(
            components.union(edge.u.data(), edge.v.data()),
            "edge {:?} closes a cycle",
            edge
        );
    }
    // |V|-1 acyclic edges over |V| vertices leave a single component.
    let root = components.find(graph.vertices().next().unwrap().data());
    for vertex in graph.vertices() {
        assert_eq!(components.find(vertex.data()), root);
    }
}

fn total_weight<T: Clone + Eq + std::hash::Hash>(tree: &HashSet<Edge<T>>) -> Distance {
    tree.iter().map(|e| e.weight).sum()
}

// Kruskal's algorithm as an independent reference for MST weight.
fn kruskal_weight<T>(graph: &Graph<T>) -> Distance
where
    T: Clone + Eq + std::hash::Hash,
{
    let mut edges: Vec<_> = graph.edges().iter().collect();
    edges.sort_by_key(|e| e.weight);

    let mut components = UnionFind::new(graph.vertices().map(|v| v.data().clone()));
    let mut weight = 0;
    for edge in edges {
        if components.union(edge.u.data(), edge.v.data()) {
            weight += edge.weight;
        }
    }
    weight
}

#[test]
fn picks_the_cheap_path_over_the_direct_edge() {
    let (graph, v) = diamond_graph();
    let tree = minimum_spanning_tree(&v[0], &graph).unwrap().unwrap();

    let expected: HashSet<_> = [
        Edge::new(v[0].clone(), v[1].clone(), 1), // A-B
        Edge::new(v[1].clone(), v[2].clone(), 2), // B-C
        Edge::new(v[2].clone(), v[3].clone(), 1), // C-D
    ]
    .into_iter()
    .collect();
    assert_eq!(tree, expected);
    assert_eq!(total_weight(&tree), 4);
}

#[test]
fn tree_spans_all_vertices_from_any_start() {
    let (graph, vertices) = diamond_graph();
    for start in &vertices {
        let tree = minimum_spanning_tree(start, &graph).unwrap().unwrap();
        assert_spanning_and_acyclic(&tree, &graph);
        assert_eq!(total_weight(&tree), 4);
    }
}

#[test]
fn disconnected_graph_has_no_spanning_tree() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);
    let x = graph.add_vertex(10);
    let y = graph.add_vertex(20);
    graph.add_undirected_edge(&a, &b, 1);
    graph.add_undirected_edge(&x, &y, 1);

    // no spanning tree regardless of which component the start is in
    assert_eq!(minimum_spanning_tree(&a, &graph).unwrap(), None);
    assert_eq!(minimum_spanning_tree(&x, &graph).unwrap(), None);
}

#[test]
fn isolated_vertex_means_no_spanning_tree() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);
    graph.add_undirected_edge(&a, &b, 3);
    graph.add_vertex(99);

    assert_eq!(minimum_spanning_tree(&a, &graph).unwrap(), None);
}

#[test]
fn single_vertex_graph_has_empty_tree() {
    let mut graph = Graph::new();
    let only = graph.add_vertex("only");
    let tree = minimum_spanning_tree(&only, &graph).unwrap().unwrap();
    assert!(tree.is_empty());
}

#[test]
fn rejects_unknown_start() {
    let (graph, _) = diamond_graph();
    let stranger = Vertex::new('Z');
    assert!(matches!(
        minimum_spanning_tree(&stranger, &graph),
        Err(Error::StartNotFound(_))
    ));
}

#[test]
fn matches_kruskal_on_random_connected_graphs() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..10 {
        let n = rng.gen_range(2..25);
        let mut graph = Graph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.add_vertex(i)).collect();

        // Distinct weights keep the minimum spanning tree unique.
        let edge_count = n - 1 + rng.gen_range(0..n);
        let mut weights: Vec<Distance> = (1..=edge_count as Distance).collect();
        weights.shuffle(&mut rng);

        // Spanning chain first so the graph is connected, then extra edges.
        for i in 1..n {
            graph.add_undirected_edge(&vertices[i - 1], &vertices[i], weights.pop().unwrap());
        }
        while let Some(weight) = weights.pop() {
            let u = &vertices[rng.gen_range(0..n)];
            let v = &vertices[rng.gen_range(0..n)];
            if u != v {
                graph.add_undirected_edge(u, v, weight);
            }
        }

        let start = &vertices[rng.gen_range(0..n)];
        let tree = minimum_spanning_tree(start, &graph).unwrap().unwrap();
        assert_spanning_and_acyclic(&tree, &graph);
        assert_eq!(total_weight(&tree), kruskal_weight(&graph));
    }
}
