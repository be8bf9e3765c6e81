use damero::graph::{LayerEdge, LayerNode, LayeredGraph};
use damero::{Cell, Route};

fn cell(id: u8) -> Cell {
    Cell::new(id).unwrap()
}

fn route(ids: &[u8]) -> Route {
    ids.iter().map(|&id| cell(id)).collect()
}

fn node(step: usize, id: u8) -> LayerNode {
    LayerNode {
        step,
        cell: cell(id),
    }
}

#[test]
fn two_winning_routes_merge_at_shared_nodes() {
    let wins = vec![route(&[1, 6, 11, 16]), route(&[1, 2, 11, 16])];
    let dag = LayeredGraph::from_wins(&wins);

    // Shared: (0,1), (2,11), (3,16); distinct: (1,6) and (1,2).
    assert_eq!(
        dag.nodes,
        vec![node(0, 1), node(1, 2), node(1, 6), node(2, 11), node(3, 16)]
    );
    assert_eq!(dag.edges.len(), 6);

    // Multi-parent merge: (2,11) keeps both incoming traversals.
    let incoming = dag.in_edges(node(2, 11));
    assert_eq!(incoming.len(), 2);
    let parents: Vec<Cell> = incoming.iter().map(|&i| dag.edges[i].from).collect();
    assert!(parents.contains(&cell(6)));
    assert!(parents.contains(&cell(2)));
}

#[test]
fn construction_is_invariant_under_input_reordering() {
    let a = vec![route(&[1, 6, 11, 16]), route(&[1, 2, 11, 16])];
    let b = vec![route(&[1, 2, 11, 16]), route(&[1, 6, 11, 16])];

    let dag_a = LayeredGraph::from_wins(&a);
    let dag_b = LayeredGraph::from_wins(&b);

    assert_eq!(dag_a.nodes, dag_b.nodes);

    let multiset = |dag: &LayeredGraph| {
        let mut edges: Vec<(usize, u8, u8)> = dag
            .edges
            .iter()
            .map(|e| (e.step, e.from.id(), e.to.id()))
            .collect();
        edges.sort_unstable();
        edges
    };
    assert_eq!(multiset(&dag_a), multiset(&dag_b));
}

#[test]
fn trivial_routes_contribute_nothing() {
    let wins = vec![route(&[5]), route(&[])];
    let dag = LayeredGraph::from_wins(&wins);
    assert!(dag.nodes.is_empty());
    assert!(dag.edges.is_empty());
    assert_eq!(dag.max_step(), 0);
}

#[test]
fn repeated_transitions_stay_separate_records_but_group_together() {
    // Two routes traverse 1→6 at step 0; the records are kept apart and the
    // grouping exposes both, so a renderer can flash every drawn instance.
    let wins = vec![route(&[1, 6, 11]), route(&[1, 6, 10])];
    let dag = LayeredGraph::from_wins(&wins);

    assert_eq!(dag.edges.len(), 4);
    let duplicates: Vec<&LayerEdge> = dag
        .edges
        .iter()
        .filter(|e| e.step == 0 && e.from == cell(1) && e.to == cell(6))
        .collect();
    assert_eq!(duplicates.len(), 2);

    let groups = dag.edge_groups();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&(0, cell(1), cell(6))].len(), 2);
    assert_eq!(groups[&(1, cell(6), cell(11))].len(), 1);
    assert_eq!(groups[&(1, cell(6), cell(10))].len(), 1);
}

#[test]
fn layers_index_nodes_by_step() {
    let wins = vec![route(&[1, 6, 11, 16]), route(&[1, 2, 11, 16])];
    let dag = LayeredGraph::from_wins(&wins);

    assert_eq!(dag.max_step(), 3);
    let layer1: Vec<u8> = dag.layer(1).map(|n| n.cell.id()).collect();
    assert_eq!(layer1, vec![2, 6]);
    let layer3: Vec<u8> = dag.layer(3).map(|n| n.cell.id()).collect();
    assert_eq!(layer3, vec![16]);
}
