use crate::algorithm::ShortestPathAlgorithm;
use crate::{create_graph, Dijkstra, DirectedGraph, MutableGraph};
use libc::{c_double, size_t};

/// Predecessor value reported for the source and for unreachable vertices
pub const LZD_NO_PREDECESSOR: size_t = size_t::MAX;

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<f64>,
}

/// Returns null when `vertex_count` is negative
#[no_mangle]
pub extern "C" fn lzd_graph_new(vertex_count: i64) -> *mut FfiGraph {
    match create_graph(vertex_count) {
        Ok(graph) => Box::into_raw(Box::new(FfiGraph { graph })),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn lzd_graph_add_edge(
    g: *mut FfiGraph,
    from: size_t,
    to: size_t,
    weight: c_double,
) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.add_edge(from, to, weight)
}

#[no_mangle]
pub extern "C" fn lzd_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[repr(C)]
pub struct FfiResult {
    pub distances: *mut c_double,
    pub predecessors: *mut size_t,
    pub len: size_t,
    pub source: size_t,
}

#[no_mangle]
pub extern "C" fn lzd_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Returns null when the graph is null or `source` is out of range.
/// Unreachable vertices get an infinite distance.
#[no_mangle]
pub extern "C" fn lzd_shortest_paths(g: *const FfiGraph, source: size_t) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => {
            let len = result.distances.len();
            let dist_vec = result.distances.into_boxed_slice();
            let pred_vec: Box<[size_t]> = result
                .predecessors
                .into_iter()
                .map(|p| p.unwrap_or(LZD_NO_PREDECESSOR))
                .collect();
            Box::into_raw(Box::new(FfiResult {
                distances: Box::into_raw(dist_vec) as *mut c_double,
                predecessors: Box::into_raw(pred_vec) as *mut size_t,
                len,
                source,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}
