use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered layer sizes, input layer first and output layer last.
///
/// Every layer is fully connected to the next, so the sizes alone fix the
/// shape of every weight matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    /// # Errors
    /// Fails unless there are at least two layers and none of them is empty.
    pub fn new(sizes: Vec<usize>) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(Error::Topology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                sizes.len()
            )));
        }
        if let Some(l) = sizes.iter().position(|&s| s == 0) {
            return Err(Error::Topology(format!("layer {} has no neurons", l)));
        }
        Ok(Topology { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn depth(&self) -> usize {
        self.sizes.len()
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Number of weights leaving each neuron of layer `l`.
    pub fn fan_out(&self, l: usize) -> usize {
        self.sizes.get(l + 1).copied().unwrap_or(0)
    }

    /// Serializes the topology to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Deserializes a topology from a JSON array of layer sizes.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Topology> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 28×28 digit images, 60 hidden neurons, one output per digit.
impl Default for Topology {
    fn default() -> Self {
        Topology { sizes: vec![784, 60, 10] }
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = Error;

    fn try_from(sizes: Vec<usize>) -> Result<Topology> {
        Topology::new(sizes)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_is_next_layer_size() {
        let t = Topology::new(vec![4, 3, 2]).unwrap();
        assert_eq!((t.fan_out(0), t.fan_out(1), t.fan_out(2)), (3, 2, 0));
        assert_eq!((t.input_size(), t.output_size(), t.depth()), (4, 2, 3));
    }

    #[test]
    fn rejects_degenerate_topologies() {
        assert!(Topology::new(vec![5]).is_err());
        assert!(Topology::new(vec![5, 0, 2]).is_err());
    }

    #[test]
    fn json_is_a_plain_size_list() {
        let t: Topology = serde_json::from_str("[2, 8, 8, 1]").unwrap();
        assert_eq!(t.sizes(), &[2, 8, 8, 1]);
        assert_eq!(serde_json::to_string(&t).unwrap(), "[2,8,8,1]");
        assert!(serde_json::from_str::<Topology>("[3]").is_err());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topology.json");
        let t = Topology::new(vec![10, 5, 3]).unwrap();
        t.save_json(&path).unwrap();
        assert_eq!(Topology::load_json(&path).unwrap(), t);
    }
}
