//! Shape generation for 2D primitives
//!
//! Positions are in board units: one unit per cell, origin at the top-left
//! corner, y growing downward.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::game::Snapshot;
use crate::sim::{Cell, GameStatus};

/// Gap left around each snake segment (board units)
const SEGMENT_INSET: f32 = 0.05;
/// Food radius relative to a cell
const FOOD_RADIUS: f32 = 0.4;
const FOOD_SEGMENTS: u32 = 16;
/// Grid line thickness (board units)
const GRID_LINE_WIDTH: f32 = 0.04;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Inset square covering one cell
pub fn cell_quad(cell: Cell, inset: f32, color: [f32; 4]) -> Vec<Vertex> {
    let min = cell.as_vec2() + Vec2::splat(inset);
    let max = cell.as_vec2() + Vec2::splat(1.0 - inset);
    rect(min, max, color)
}

/// Segment color: distinct head, alternating body stripes
pub fn segment_color(index: usize) -> [f32; 4] {
    match index {
        0 => colors::SNAKE_HEAD,
        i if i % 2 == 0 => colors::SNAKE_BODY_EVEN,
        _ => colors::SNAKE_BODY_ODD,
    }
}

/// Thin lines between cells
pub fn grid_lines(grid_size: i32) -> Vec<Vertex> {
    let size = grid_size as f32;
    let half = GRID_LINE_WIDTH / 2.0;
    let mut vertices = Vec::with_capacity(((grid_size - 1).max(0) * 12) as usize);
    for i in 1..grid_size {
        let at = i as f32;
        vertices.extend(rect(
            Vec2::new(at - half, 0.0),
            Vec2::new(at + half, size),
            colors::GRID_LINE,
        ));
        vertices.extend(rect(
            Vec2::new(0.0, at - half),
            Vec2::new(size, at + half),
            colors::GRID_LINE,
        ));
    }
    vertices
}

/// Full frame for a snapshot, back to front
pub fn board(snapshot: &Snapshot, grid_size: i32, show_grid: bool) -> Vec<Vertex> {
    let size = grid_size as f32;
    let mut vertices = rect(Vec2::ZERO, Vec2::splat(size), colors::BOARD);

    if show_grid {
        vertices.extend(grid_lines(grid_size));
    }

    // Tail first so the head ends up on top
    for (i, cell) in snapshot.snake.iter().enumerate().rev() {
        vertices.extend(cell_quad(*cell, SEGMENT_INSET, segment_color(i)));
    }

    if let Some(food) = snapshot.food {
        let center = food.as_vec2() + Vec2::splat(0.5);
        vertices.extend(circle(center, FOOD_RADIUS, colors::FOOD, FOOD_SEGMENTS));
    }

    if matches!(snapshot.status, GameStatus::Paused | GameStatus::Over | GameStatus::NotStarted) {
        vertices.extend(rect(Vec2::ZERO, Vec2::splat(size), colors::VEIL));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: GameStatus) -> Snapshot {
        Snapshot {
            snake: vec![Cell::new(2, 1), Cell::new(1, 1)],
            food: Some(Cell::new(3, 3)),
            score: 10,
            high_score: 0,
            status,
            interval_ms: 150,
            new_record: false,
        }
    }

    #[test]
    fn test_cell_quad_bounds() {
        let verts = cell_quad(Cell::new(3, 4), 0.1, colors::FOOD);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[0] >= 3.1 - 1e-5 && v.position[0] <= 3.9 + 1e-5);
            assert!(v.position[1] >= 4.1 - 1e-5 && v.position[1] <= 4.9 + 1e-5);
        }
    }

    #[test]
    fn test_segment_colors() {
        assert_eq!(segment_color(0), colors::SNAKE_HEAD);
        assert_eq!(segment_color(1), colors::SNAKE_BODY_ODD);
        assert_eq!(segment_color(2), colors::SNAKE_BODY_EVEN);
    }

    #[test]
    fn test_grid_line_count() {
        // 19 vertical + 19 horizontal lines, 6 vertices each
        assert_eq!(grid_lines(20).len(), 38 * 6);
        assert!(grid_lines(1).is_empty());
    }

    #[test]
    fn test_board_running_layers() {
        let verts = board(&snapshot(GameStatus::Running), 20, false);
        // board + 2 segments + food
        assert_eq!(verts.len(), 6 + 2 * 6 + FOOD_SEGMENTS as usize * 3);
        // Head drawn last among segments
        let head = &verts[12..18];
        assert!(head.iter().all(|v| v.color == colors::SNAKE_HEAD));
    }

    #[test]
    fn test_board_paused_adds_veil() {
        let running = board(&snapshot(GameStatus::Running), 20, false);
        let paused = board(&snapshot(GameStatus::Paused), 20, false);
        assert_eq!(paused.len(), running.len() + 6);
        assert_eq!(paused.last().map(|v| v.color), Some(colors::VEIL));
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 1.0, colors::FOOD, 8).len(), 24);
    }
}
