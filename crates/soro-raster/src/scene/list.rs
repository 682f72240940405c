use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one composition.
///
/// Items composite back-to-front: ascending z-index, then insertion order
/// within a layer. `push()` is O(1); sorting happens lazily on iteration and
/// the index buffer is reused.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn marker(x: f32) -> DrawCmd {
        DrawCmd::Line(crate::scene::shapes::line::LineCmd {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, 1.0),
            width: 1.0,
            color: Color::white(),
        })
    }

    fn marker_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Line(l) => l.from.x,
            _ => unreachable!(),
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(2), marker(0.0));
        list.push(ZIndex::new(0), marker(1.0));
        list.push(ZIndex::new(0), marker(2.0));
        list.push(ZIndex::new(1), marker(3.0));

        let order: Vec<f32> = list.iter_in_paint_order().map(marker_x).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(1), marker(0.0));
        let _ = list.iter_in_paint_order().count();

        list.push(ZIndex::new(0), marker(1.0));
        let order: Vec<f32> = list.iter_in_paint_order().map(marker_x).collect();
        assert_eq!(order, vec![1.0, 0.0]);
    }

    #[test]
    fn clear_resets_ordering() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(5), marker(0.0));
        list.clear();
        assert!(list.is_empty());

        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
