//! Drawing-session state machine.
//!
//! [`Whiteboard`] owns the [`Board`] and turns pointer-level host calls into
//! shape edits. It moves between three states:
//!
//! - `Idle`: nothing in progress.
//! - `Drawing`: one shape, addressed by its board index, is being authored.
//! - `Selecting`: a selection rectangle is being dragged from an anchor.

use crate::canvas::Board;
use crate::config::{EraseMode, WhiteboardConfig};
use crate::draw::DrawContext;
use crate::error::WhiteboardResult;
use crate::export::export_svg;
use crate::geometry::rect_from_corners;
use crate::shapes::{Shape, ShapeStyle};
use crate::tools::{ToolKind, ToolManager, extend_shape};
use kurbo::{Point, Rect, Vec2};

/// Current interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A shape is being drawn; `index` is its position on the board.
    Drawing { index: usize },
    /// A selection rectangle spans `anchor` to `current`.
    Selecting { anchor: Point, current: Point },
}

/// An explicitly owned whiteboard session.
#[derive(Debug, Clone)]
pub struct Whiteboard {
    config: WhiteboardConfig,
    board: Board,
    tools: ToolManager,
    state: InteractionState,
    /// When set, pointer-down starts a selection instead of a shape.
    select_mode: bool,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Whiteboard {
    /// Create a whiteboard with default settings.
    pub fn new() -> Self {
        Self::from_valid_config(WhiteboardConfig::default())
    }

    /// Create a whiteboard with the given configuration.
    ///
    /// The configuration is validated first, so a non-positive default
    /// thickness or a negative hit tolerance is rejected here.
    pub fn with_config(config: WhiteboardConfig) -> WhiteboardResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WhiteboardConfig) -> Self {
        let tools = Self::initial_tools(&config);
        Self {
            config,
            board: Board::new(),
            tools,
            state: InteractionState::Idle,
            select_mode: false,
        }
    }

    fn initial_tools(config: &WhiteboardConfig) -> ToolManager {
        ToolManager::new(
            config.default_tool,
            ShapeStyle::new(config.default_color.clone(), config.default_thickness),
        )
    }

    /// Reset to the freshly constructed state. Same as [`Whiteboard::clear`].
    pub fn init(&mut self) {
        self.clear();
    }

    /// Remove every shape and reset tool, style and interaction state to the
    /// configured defaults.
    pub fn clear(&mut self) {
        self.board.clear();
        self.tools = Self::initial_tools(&self.config);
        self.state = InteractionState::Idle;
        self.select_mode = false;
        log::debug!("Whiteboard cleared");
    }

    // --- Drawing ---

    /// Pointer down. Starts a new shape, or a selection in select mode.
    pub fn start_drawing(&mut self, x: f64, y: f64) {
        if self.select_mode || self.is_selecting() {
            self.start_selection(x, y);
            return;
        }
        self.end_drawing();

        let point = Point::new(x, y);
        match self.tools.begin_shape(point) {
            Some(shape) => {
                let index = self.board.add_shape(shape);
                self.state = InteractionState::Drawing { index };
                log::debug!(
                    "Started {} at ({x}, {y}), index {index}",
                    self.tools.current_tool
                );
            }
            None => {
                log::warn!(
                    "Tool {} does not create shapes; ignoring start at ({x}, {y})",
                    self.tools.current_tool
                );
            }
        }
    }

    /// Pointer move. Grows the in-progress shape or the selection rectangle.
    pub fn continue_drawing(&mut self, x: f64, y: f64) {
        match self.state {
            InteractionState::Selecting { .. } => self.update_selection(x, y),
            InteractionState::Drawing { index } => {
                if let Some(shape) = self.board.get_mut(index) {
                    extend_shape(shape, Point::new(x, y));
                    log::trace!("Extended shape {index} to ({x}, {y})");
                }
            }
            InteractionState::Idle => {}
        }
    }

    /// Pointer up. Finalizes the in-progress shape or ends the selection.
    pub fn end_drawing(&mut self) {
        match self.state {
            InteractionState::Selecting { .. } => self.end_selection(),
            InteractionState::Drawing { index } => {
                self.state = InteractionState::Idle;
                log::debug!("Finished shape {index}");
            }
            InteractionState::Idle => {}
        }
    }

    /// Render every shape in draw order.
    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        for shape in self.board.shapes() {
            shape.draw(ctx, &self.config.highlight);
        }
    }

    // --- Tool and style ---

    /// Change the tool. Clears the current selection.
    pub fn set_shape_type(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
        self.clear_selection();
    }

    /// Change the tool from a host-supplied numeric value.
    pub fn set_shape_type_value(&mut self, value: u32) -> WhiteboardResult<()> {
        self.set_shape_type(ToolKind::try_from(value)?);
        Ok(())
    }

    /// Change the tool by name (`"CIRCLE"`, `"rectangle"`, ...).
    pub fn set_shape_type_name(&mut self, name: &str) -> WhiteboardResult<()> {
        self.set_shape_type(name.parse()?);
        Ok(())
    }

    /// Change the color for new shapes (and the in-progress shape when
    /// `live_style` is enabled).
    pub fn set_color(&mut self, color: &str) {
        self.tools.set_color(color);
        if self.config.live_style {
            if let Some(shape) = self.in_progress_mut() {
                shape.style_mut().color = color.to_string();
            }
        }
    }

    /// Change the stroke width for new shapes (and the in-progress shape when
    /// `live_style` is enabled).
    pub fn set_thickness(&mut self, thickness: f64) -> WhiteboardResult<()> {
        self.tools.set_thickness(thickness)?;
        if self.config.live_style {
            if let Some(shape) = self.in_progress_mut() {
                shape.style_mut().thickness = thickness;
            }
        }
        Ok(())
    }

    /// Route pointer-down to selection instead of drawing.
    pub fn set_select_mode(&mut self, enabled: bool) {
        self.select_mode = enabled;
    }

    // --- Selection ---

    /// Begin a selection rectangle at `(x, y)`. Finalizes any drawing and
    /// clears the previous selection.
    pub fn start_selection(&mut self, x: f64, y: f64) {
        if let InteractionState::Drawing { .. } = self.state {
            self.end_drawing();
        }
        let anchor = Point::new(x, y);
        self.board.clear_selection();
        self.state = InteractionState::Selecting {
            anchor,
            current: anchor,
        };
        log::debug!("Selection started at ({x}, {y})");
    }

    /// Stretch the selection rectangle to `(x, y)` and re-evaluate every shape.
    pub fn update_selection(&mut self, x: f64, y: f64) {
        let InteractionState::Selecting { anchor, .. } = self.state else {
            return;
        };
        let current = Point::new(x, y);
        self.state = InteractionState::Selecting { anchor, current };
        let rect = rect_from_corners(anchor, current);
        let count = self
            .board
            .select_in_rect(rect, self.config.selection_policy);
        log::trace!("Selection {rect:?} holds {count} shapes");
    }

    /// Finish the selection gesture; selected flags stay.
    pub fn end_selection(&mut self) {
        if let InteractionState::Selecting { .. } = self.state {
            self.state = InteractionState::Idle;
            log::debug!("Selection ended with {} shapes", self.board.selected_count());
        }
    }

    /// Deselect everything without deleting.
    pub fn clear_selection(&mut self) {
        self.board.clear_selection();
    }

    /// Select every shape on the board.
    pub fn select_all(&mut self) {
        self.board.select_all();
    }

    /// Translate every selected shape.
    pub fn move_selected(&mut self, dx: f64, dy: f64) {
        let moved = self.board.move_selected(Vec2::new(dx, dy));
        log::trace!("Moved {moved} shapes by ({dx}, {dy})");
    }

    /// Remove every selected shape.
    pub fn delete_selected(&mut self) {
        let removed = self.board.delete_selected();
        log::debug!("Deleted {} selected shapes", removed.len());
        self.reconcile_removed(&removed);
    }

    // --- Erasing ---

    /// Erase at `(x, y)` according to the configured [`EraseMode`].
    ///
    /// In whole-shape mode `radius` is not consulted; hit-testing uses the
    /// configured tolerance.
    pub fn erase(&mut self, x: f64, y: f64, radius: f64) {
        let point = Point::new(x, y);
        let tolerance = self.config.hit_tolerance;
        let removed = match self.config.erase_mode {
            EraseMode::WholeShape => self.board.erase_at(point, tolerance),
            EraseMode::Points => self.board.erase_points(point, radius, tolerance),
        };
        if !removed.is_empty() {
            log::debug!("Erased {} shapes at ({x}, {y})", removed.len());
        }
        self.reconcile_removed(&removed);
    }

    /// Keep the in-progress index pointing at the same shape after removals.
    fn reconcile_removed(&mut self, removed: &[usize]) {
        let InteractionState::Drawing { index } = self.state else {
            return;
        };
        if removed.binary_search(&index).is_ok() {
            log::debug!("In-progress shape {index} was removed");
            self.state = InteractionState::Idle;
            return;
        }
        let shift = removed.partition_point(|&r| r < index);
        self.state = InteractionState::Drawing {
            index: index - shift,
        };
    }

    // --- Export and queries ---

    /// Serialize the current shapes as an SVG document.
    pub fn export_vector(&self) -> String {
        export_svg(self.board.shapes())
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        self.board.shapes()
    }

    pub fn selected_count(&self) -> usize {
        self.board.selected_count()
    }

    /// Indices of shapes under `(x, y)`, front to back.
    pub fn shapes_at_point(&self, x: f64, y: f64) -> Vec<usize> {
        self.board
            .shapes_at_point(Point::new(x, y), self.config.hit_tolerance)
    }

    /// Bounding box of all content, if any.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.board.bounds()
    }

    /// The live selection rectangle, normalized.
    pub fn selection_rect(&self) -> Option<Rect> {
        match self.state {
            InteractionState::Selecting { anchor, current } => {
                Some(rect_from_corners(anchor, current))
            }
            _ => None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    pub fn color(&self) -> &str {
        &self.tools.current_style.color
    }

    pub fn thickness(&self) -> f64 {
        self.tools.current_style.thickness
    }

    pub fn select_mode(&self) -> bool {
        self.select_mode
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, InteractionState::Drawing { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, InteractionState::Selecting { .. })
    }

    /// The shape currently being drawn.
    pub fn in_progress(&self) -> Option<&Shape> {
        match self.state {
            InteractionState::Drawing { index } => self.board.get(index),
            _ => None,
        }
    }

    fn in_progress_mut(&mut self) -> Option<&mut Shape> {
        match self.state {
            InteractionState::Drawing { index } => self.board.get_mut(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionPolicy;
    use crate::error::WhiteboardError;

    fn draw_stroke(wb: &mut Whiteboard, points: &[(f64, f64)]) {
        let (x, y) = points[0];
        wb.start_drawing(x, y);
        for &(x, y) in &points[1..] {
            wb.continue_drawing(x, y);
        }
        wb.end_drawing();
    }

    #[test]
    fn test_freehand_scenario() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

        assert_eq!(wb.shapes().len(), 1);
        let stroke = wb.shapes()[0].as_freehand().unwrap();
        assert_eq!(
            stroke.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0)
            ]
        );
        assert!(!wb.is_drawing());
    }

    #[test]
    fn test_rectangle_scenario() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Rectangle);
        draw_stroke(&mut wb, &[(5.0, 5.0), (25.0, 15.0)]);

        assert_eq!(wb.shapes().len(), 1);
        assert_eq!(wb.shapes()[0].bounds(), Rect::new(5.0, 5.0, 25.0, 15.0));
    }

    #[test]
    fn test_circle_scenario() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Circle);
        wb.start_drawing(0.0, 0.0);
        assert!(wb.is_drawing());
        assert_eq!(wb.in_progress().map(Shape::kind), Some(ToolKind::Circle));
        wb.continue_drawing(3.0, 4.0);
        wb.end_drawing();
        assert!(wb.in_progress().is_none());

        let circle = wb.shapes()[0].as_circle().unwrap();
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_shape_uses_current_style() {
        let mut wb = Whiteboard::new();
        wb.set_color("#ff0000");
        wb.set_thickness(8.0).unwrap();
        draw_stroke(&mut wb, &[(0.0, 0.0), (1.0, 1.0)]);
        let style = wb.shapes()[0].style();
        assert_eq!(style.color, "#ff0000");
        assert!((style.thickness - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_continue_and_end_without_shape_are_noops() {
        let mut wb = Whiteboard::new();
        wb.continue_drawing(5.0, 5.0);
        wb.end_drawing();
        assert!(wb.shapes().is_empty());
        assert_eq!(wb.state(), InteractionState::Idle);
    }

    #[test]
    fn test_reserved_tool_creates_nothing() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Triangle);
        draw_stroke(&mut wb, &[(0.0, 0.0), (10.0, 10.0)]);
        assert!(wb.shapes().is_empty());
        assert_eq!(wb.state(), InteractionState::Idle);
    }

    #[test]
    fn test_only_one_shape_in_progress() {
        let mut wb = Whiteboard::new();
        wb.start_drawing(0.0, 0.0);
        wb.start_drawing(50.0, 50.0);
        wb.continue_drawing(60.0, 60.0);
        wb.end_drawing();

        assert_eq!(wb.shapes().len(), 2);
        assert_eq!(wb.shapes()[0].as_freehand().unwrap().len(), 1);
        assert_eq!(wb.shapes()[1].as_freehand().unwrap().len(), 2);
    }

    #[test]
    fn test_selection_scenario() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Rectangle);
        draw_stroke(&mut wb, &[(10.0, 10.0), (20.0, 20.0)]);
        draw_stroke(&mut wb, &[(40.0, 40.0), (70.0, 70.0)]);
        draw_stroke(&mut wb, &[(100.0, 100.0), (120.0, 120.0)]);

        wb.start_selection(0.0, 0.0);
        assert!(wb.is_selecting());
        wb.update_selection(50.0, 50.0);
        assert_eq!(wb.selection_rect(), Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
        wb.end_selection();

        assert!(!wb.is_selecting());
        let flags: Vec<bool> = wb.shapes().iter().map(Shape::is_selected).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn test_contains_policy() {
        let config = WhiteboardConfig {
            selection_policy: SelectionPolicy::Contains,
            ..WhiteboardConfig::default()
        };
        let mut wb = Whiteboard::with_config(config).unwrap();
        wb.set_shape_type(ToolKind::Rectangle);
        draw_stroke(&mut wb, &[(10.0, 10.0), (20.0, 20.0)]);
        draw_stroke(&mut wb, &[(40.0, 40.0), (70.0, 70.0)]);

        wb.start_selection(50.0, 50.0);
        wb.update_selection(0.0, 0.0);
        wb.end_selection();
        assert_eq!(wb.board().selected_indices(), vec![0]);
    }

    #[test]
    fn test_selection_reevaluates_on_update() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Circle);
        draw_stroke(&mut wb, &[(100.0, 100.0), (105.0, 100.0)]);

        wb.start_selection(0.0, 0.0);
        wb.update_selection(120.0, 120.0);
        assert_eq!(wb.selected_count(), 1);
        wb.update_selection(10.0, 10.0);
        assert_eq!(wb.selected_count(), 0);
    }

    #[test]
    fn test_update_selection_without_start_is_noop() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (5.0, 5.0)]);
        wb.update_selection(100.0, 100.0);
        assert_eq!(wb.selected_count(), 0);
    }

    #[test]
    fn test_select_mode_routes_pointer_events() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(10.0, 10.0), (20.0, 10.0)]);

        wb.set_select_mode(true);
        draw_stroke(&mut wb, &[(0.0, 0.0), (30.0, 30.0)]);

        assert_eq!(wb.shapes().len(), 1);
        assert_eq!(wb.selected_count(), 1);
        assert_eq!(wb.state(), InteractionState::Idle);
    }

    #[test]
    fn test_set_shape_type_clears_selection() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (5.0, 5.0)]);
        wb.select_all();
        assert_eq!(wb.selected_count(), 1);
        wb.set_shape_type(ToolKind::Circle);
        assert_eq!(wb.selected_count(), 0);
        assert_eq!(wb.tool(), ToolKind::Circle);
    }

    #[test]
    fn test_set_shape_type_value() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type_value(1).unwrap();
        assert_eq!(wb.tool(), ToolKind::Rectangle);
        assert!(matches!(
            wb.set_shape_type_value(42),
            Err(WhiteboardError::UnknownTool(42))
        ));
        assert_eq!(wb.tool(), ToolKind::Rectangle);

        wb.set_shape_type_name("circle").unwrap();
        assert_eq!(wb.tool(), ToolKind::Circle);
        assert!(wb.set_shape_type_name("ARROW").is_err());
    }

    #[test]
    fn test_move_selected_round_trip() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Circle);
        draw_stroke(&mut wb, &[(10.0, 10.0), (13.0, 14.0)]);
        wb.set_shape_type(ToolKind::Rectangle);
        draw_stroke(&mut wb, &[(40.0, 40.0), (50.0, 45.0)]);
        let before: Vec<Rect> = wb.shapes().iter().map(Shape::bounds).collect();

        wb.select_all();
        wb.move_selected(7.5, -2.0);
        assert!((wb.shapes()[0].bounds().x0 - (before[0].x0 + 7.5)).abs() < 1e-9);
        wb.move_selected(-7.5, 2.0);

        for (shape, b) in wb.shapes().iter().zip(&before) {
            let a = shape.bounds();
            assert!((a.x0 - b.x0).abs() < 1e-9 && (a.y0 - b.y0).abs() < 1e-9);
            assert!((a.x1 - b.x1).abs() < 1e-9 && (a.y1 - b.y1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_delete_selected() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (5.0, 5.0)]);
        draw_stroke(&mut wb, &[(100.0, 100.0), (105.0, 105.0)]);
        draw_stroke(&mut wb, &[(200.0, 200.0), (205.0, 205.0)]);

        wb.start_selection(90.0, 90.0);
        wb.update_selection(300.0, 300.0);
        wb.end_selection();
        let selected = wb.selected_count();
        assert_eq!(selected, 2);

        wb.delete_selected();
        assert_eq!(wb.shapes().len(), 3 - selected);
        assert!(wb.shapes().iter().all(|s| !s.is_selected()));
        assert_eq!(wb.selected_count(), 0);
    }

    #[test]
    fn test_erase_whole_shape_idempotent() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (100.0, 0.0)]);
        wb.set_shape_type(ToolKind::Circle);
        draw_stroke(&mut wb, &[(50.0, 50.0), (60.0, 50.0)]);

        wb.erase(50.0, 2.0, 10.0);
        assert_eq!(wb.shapes().len(), 1);
        assert!(matches!(wb.shapes()[0], Shape::Circle(_)));

        wb.erase(50.0, 2.0, 10.0);
        assert_eq!(wb.shapes().len(), 1);
    }

    #[test]
    fn test_erase_points_mode() {
        let config = WhiteboardConfig {
            erase_mode: EraseMode::Points,
            ..WhiteboardConfig::default()
        };
        let mut wb = Whiteboard::with_config(config).unwrap();
        draw_stroke(&mut wb, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);

        wb.erase(10.0, 0.0, 3.0);
        assert_eq!(wb.shapes()[0].as_freehand().unwrap().len(), 2);
        wb.erase(10.0, 0.0, 3.0);
        assert_eq!(wb.shapes()[0].as_freehand().unwrap().len(), 2);

        wb.erase(0.0, 0.0, 3.0);
        wb.erase(20.0, 0.0, 3.0);
        assert!(wb.shapes().is_empty());
    }

    #[test]
    fn test_erase_points_with_nan_radius_keeps_strokes() {
        let config = WhiteboardConfig {
            erase_mode: EraseMode::Points,
            ..WhiteboardConfig::default()
        };
        let mut wb = Whiteboard::with_config(config).unwrap();
        draw_stroke(&mut wb, &[(0.0, 0.0), (10.0, 0.0)]);
        draw_stroke(&mut wb, &[(500.0, 500.0), (510.0, 500.0)]);

        wb.erase(9999.0, 9999.0, f64::NAN);
        wb.erase(0.0, 0.0, f64::NAN);
        assert_eq!(wb.shapes().len(), 2);
        assert!(wb.shapes().iter().all(|s| s.as_freehand().unwrap().len() == 2));
    }

    #[test]
    fn test_removal_below_in_progress_keeps_target() {
        let mut wb = Whiteboard::new();
        draw_stroke(&mut wb, &[(0.0, 0.0), (100.0, 0.0)]);
        wb.start_drawing(0.0, 300.0);
        wb.continue_drawing(10.0, 300.0);

        // Erase the first stroke while the second is still being drawn
        wb.erase(50.0, 0.0, 1.0);
        assert_eq!(wb.shapes().len(), 1);
        assert_eq!(wb.state(), InteractionState::Drawing { index: 0 });

        wb.continue_drawing(20.0, 300.0);
        wb.end_drawing();
        assert_eq!(wb.shapes()[0].as_freehand().unwrap().len(), 3);
    }

    #[test]
    fn test_removing_in_progress_returns_to_idle() {
        let mut wb = Whiteboard::new();
        wb.start_drawing(0.0, 0.0);
        wb.continue_drawing(100.0, 0.0);
        wb.erase(50.0, 0.0, 1.0);

        assert!(wb.shapes().is_empty());
        assert_eq!(wb.state(), InteractionState::Idle);
        wb.continue_drawing(5.0, 5.0);
        assert!(wb.shapes().is_empty());
    }

    #[test]
    fn test_live_style_off_by_default() {
        let mut wb = Whiteboard::new();
        wb.start_drawing(0.0, 0.0);
        wb.set_color("#00ff00");
        wb.end_drawing();
        assert_eq!(wb.shapes()[0].style().color, "#000000");
        assert_eq!(wb.color(), "#00ff00");
    }

    #[test]
    fn test_live_style_restyles_in_progress() {
        let config = WhiteboardConfig {
            live_style: true,
            ..WhiteboardConfig::default()
        };
        let mut wb = Whiteboard::with_config(config).unwrap();
        wb.start_drawing(0.0, 0.0);
        wb.set_color("#00ff00");
        wb.set_thickness(9.0).unwrap();
        wb.end_drawing();
        assert_eq!(wb.shapes()[0].style().color, "#00ff00");
        assert!((wb.shapes()[0].style().thickness - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_thickness_rejected() {
        let mut wb = Whiteboard::new();
        assert!(wb.set_thickness(0.0).is_err());
        assert!(wb.set_thickness(f64::NAN).is_err());
        assert!((wb.thickness() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_config_rejects_invalid_values() {
        let bad_thickness = WhiteboardConfig {
            default_thickness: -3.0,
            ..WhiteboardConfig::default()
        };
        assert!(matches!(
            Whiteboard::with_config(bad_thickness),
            Err(WhiteboardError::InvalidConfig(_))
        ));

        let bad_tolerance = WhiteboardConfig {
            hit_tolerance: f64::NAN,
            ..WhiteboardConfig::default()
        };
        assert!(Whiteboard::with_config(bad_tolerance).is_err());

        let config = WhiteboardConfig {
            default_thickness: 4.0,
            ..WhiteboardConfig::default()
        };
        let mut wb = Whiteboard::with_config(config).unwrap();
        draw_stroke(&mut wb, &[(0.0, 0.0), (5.0, 5.0)]);
        assert!((wb.shapes()[0].style().thickness - 4.0).abs() < f64::EPSILON);
        wb.clear();
        assert!((wb.thickness() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_matches_fresh_instance() {
        let mut wb = Whiteboard::new();
        wb.set_shape_type(ToolKind::Circle);
        wb.set_color("#123456");
        wb.set_thickness(7.0).unwrap();
        wb.set_select_mode(true);
        draw_stroke(&mut wb, &[(0.0, 0.0), (3.0, 4.0)]);
        wb.set_select_mode(false);
        draw_stroke(&mut wb, &[(0.0, 0.0), (3.0, 4.0)]);
        wb.start_selection(0.0, 0.0);

        wb.clear();
        let fresh = Whiteboard::new();
        assert!(wb.shapes().is_empty());
        assert_eq!(wb.state(), fresh.state());
        assert_eq!(wb.tool(), fresh.tool());
        assert_eq!(wb.color(), fresh.color());
        assert!((wb.thickness() - fresh.thickness()).abs() < f64::EPSILON);
        assert_eq!(wb.select_mode(), fresh.select_mode());
    }

    #[test]
    fn test_shapes_at_point_and_bounds() {
        let mut wb = Whiteboard::new();
        assert!(wb.content_bounds().is_none());
        wb.set_shape_type(ToolKind::Rectangle);
        draw_stroke(&mut wb, &[(0.0, 0.0), (50.0, 50.0)]);
        wb.set_shape_type(ToolKind::Circle);
        draw_stroke(&mut wb, &[(25.0, 25.0), (30.0, 25.0)]);

        assert_eq!(wb.shapes_at_point(25.0, 25.0), vec![1, 0]);
        assert_eq!(wb.content_bounds(), Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
    }
}
