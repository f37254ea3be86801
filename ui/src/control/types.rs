///
/// Possible types of control
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ControlType {
    /// An invisible control that only serves to take up space or group
    /// subcomponents
    Empty,

    /// Control that contains other controls
    Container,

    /// Clickable button
    Button,

    /// Piece of text
    Label,

    /// Horizontal slider over a continuous range of values
    Slider,
}
