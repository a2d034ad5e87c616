//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

impl PortMethodKey {
    fn new(port: &str, method: &str) -> Self {
        Self { port: port.to_string(), method: method.to_string() }
    }
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions not yet served.
    queues: HashMap<PortMethodKey, VecDeque<Interaction>>,
    /// Last interaction served per port+method, kept so `next_interaction`
    /// can hand out a reference.
    served: HashMap<PortMethodKey, Interaction>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry(PortMethodKey::new(&interaction.port, &interaction.method))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, served: HashMap::new() }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, naming what was requested and which
    /// port/method pairs the cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = PortMethodKey::new(port, method);

        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }

        let last_seq = self.served.get(&key).map_or(0, |i| i.seq);
        let interaction =
            self.queues.get_mut(&key).and_then(VecDeque::pop_front).unwrap_or_else(|| {
                panic!(
                    "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                     have been consumed. Last interaction was seq={last_seq}."
                )
            });

        self.served.insert(key.clone(), interaction);
        &self.served[&key]
    }

    /// Number of interactions still queued for the given port and method.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.queues.get(&PortMethodKey::new(port, method)).map_or(0, VecDeque::len)
    }
}
