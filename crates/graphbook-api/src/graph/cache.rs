//! Node display-object cache
//!
//! Building a node's display object (geometry detail, color, label flag) is
//! the expensive step for large graphs, so objects are shared by
//! (kind, quality, node size) key. Any settings change invalidates the
//! whole cache.

use super::{NodeKind, RenderQuality, RenderSettings};
use std::collections::HashMap;

/// Cache key: everything a display object depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ObjectKey {
    kind: NodeKind,
    quality: RenderQuality,
    /// Node size in thousandths, so the key stays hashable
    size_milli: u32,
}

/// A prepared display object for one node style
#[derive(Debug, Clone, PartialEq)]
pub struct NodeObject {
    pub color: &'static str,
    pub radius: f32,
    pub sphere_segments: u16,
    pub label_visible: bool,
}

impl NodeObject {
    fn build(kind: NodeKind, settings: &RenderSettings) -> Self {
        let sphere_segments = match settings.quality {
            RenderQuality::Low => 8,
            RenderQuality::Medium => 16,
            RenderQuality::High => 32,
        };
        Self {
            color: kind.color(),
            radius: settings.node_size,
            sphere_segments,
            label_visible: settings.show_labels,
        }
    }
}

/// Display-object cache keyed by node style
#[derive(Debug, Default)]
pub struct NodeObjectCache {
    objects: HashMap<ObjectKey, NodeObject>,
}

impl NodeObjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or build the object for a node kind under the given settings
    pub fn obtain(&mut self, kind: NodeKind, settings: &RenderSettings) -> &NodeObject {
        let key = ObjectKey {
            kind,
            quality: settings.quality,
            size_milli: (settings.node_size * 1000.0) as u32,
        };
        self.objects
            .entry(key)
            .or_insert_with(|| NodeObject::build(kind, settings))
    }

    /// Drop every cached object (called whenever settings change)
    pub fn invalidate(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
