/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Multiple resizes in one loop collapse into the last one
    #[inline]
    pub fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::Coalescer;

    #[test]
    fn decide_render_table_tests() {
        assert!(!Coalescer::decide_render(0, false));
        assert!(Coalescer::decide_render(1, false));
        assert!(Coalescer::decide_render(0, true));
        assert!(Coalescer::decide_render(3, true));
    }

    #[test]
    fn decide_resize_last_only() {
        assert_eq!(Coalescer::decide_resize(&[]), None);
        assert_eq!(Coalescer::decide_resize(&[(10, 10)]), Some((10, 10)));
        assert_eq!(
            Coalescer::decide_resize(&[(10, 10), (20, 30)]),
            Some((20, 30))
        );
    }
}
