use crate::algorithm::dijkstra::{Dijkstra, FrontierKind};
use crate::algorithm::{reconstruct_path, ShortestPathAlgorithm};
use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{create_graph, Error};
use pyo3::exceptions::{PyLookupError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::Unreachable(_) => PyLookupError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

#[pyclass]
pub struct PyGraph {
    graph: DirectedGraph<f64>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(vertex_count: i64) -> PyResult<Self> {
        let graph = create_graph(vertex_count).map_err(to_py_err)?;
        Ok(PyGraph { graph })
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> bool {
        self.graph.add_edge(from, to, weight)
    }
}

#[pyclass]
pub struct PyDijkstra {
    inner: Dijkstra,
}

#[pymethods]
impl PyDijkstra {
    #[new]
    #[pyo3(signature = (frontier = "heap"))]
    fn new(frontier: &str) -> PyResult<Self> {
        let kind: FrontierKind = frontier.parse().map_err(to_py_err)?;
        Ok(PyDijkstra {
            inner: Dijkstra::new().with_frontier(kind),
        })
    }

    /// Returns `(distances, predecessors)`; unreachable distances are `inf`
    fn shortest_paths(
        &self,
        graph: &PyGraph,
        source: usize,
    ) -> PyResult<(Vec<f64>, Vec<Option<usize>>)> {
        let result = self
            .inner
            .compute_shortest_paths(&graph.graph, source)
            .map_err(to_py_err)?;
        Ok((result.distances, result.predecessors))
    }
}

#[pyfunction]
fn path(predecessors: Vec<Option<usize>>, source: usize, target: usize) -> PyResult<Vec<usize>> {
    reconstruct_path(&predecessors, source, target).map_err(to_py_err)
}

#[pymodule]
fn lazy_dijkstra(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    m.add_class::<PyDijkstra>()?;
    m.add_function(wrap_pyfunction!(path, m)?)?;
    Ok(())
}
