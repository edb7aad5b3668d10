//! Layout model for the app's on-screen panels.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    board: NodeId,
    info: NodeId,
}

#[derive(Clone, Copy)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub board: PanelRect,
    pub info: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> LayoutNodes {
    let status = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(48.0) },
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(10.0) },
            ..Default::default()
        })
        .expect("status node");
    let board = taffy
        .new_leaf(Style {
            flex_grow: 1.0,
            margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(10.0) },
            ..Default::default()
        })
        .expect("board node");
    let info = taffy
        .new_leaf(Style {
            size: Size { width: percent(1.0), height: length(56.0) },
            ..Default::default()
        })
        .expect("info node");
    let root = taffy
        .new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size { width: percent(1.0), height: percent(1.0) },
                padding: taffy::Rect {
                    left: length(12.0),
                    right: length(12.0),
                    top: length(12.0),
                    bottom: length(12.0),
                },
                ..Default::default()
            },
            &[status, board, info],
        )
        .expect("root node");

    LayoutNodes { root, status, board, info }
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    screen_width: f32,
    screen_height: f32,
) -> FrameLayout {
    taffy
        .compute_layout(
            nodes.root,
            Size {
                width: AvailableSpace::Definite(screen_width),
                height: AvailableSpace::Definite(screen_height),
            },
        )
        .expect("layout computation");

    let panel = |node: NodeId| {
        let layout = taffy.layout(node).expect("panel layout");
        PanelRect {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        }
    };

    FrameLayout { status: panel(nodes.status), board: panel(nodes.board), info: panel(nodes.info) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_stack_without_overlap() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy);
        let layout = compute_frame_layout(&mut taffy, &nodes, 720.0, 820.0);

        assert!(layout.status.height > 0.0);
        assert!(layout.board.height > layout.status.height);
        assert!(layout.status.y + layout.status.height <= layout.board.y);
        assert!(layout.board.y + layout.board.height <= layout.info.y);
    }

    #[test]
    fn board_panel_grows_with_the_window() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy);
        let small = compute_frame_layout(&mut taffy, &nodes, 720.0, 600.0);
        let small_height = small.board.height;
        let large = compute_frame_layout(&mut taffy, &nodes, 720.0, 1_000.0);
        assert!(large.board.height > small_height);
    }
}
