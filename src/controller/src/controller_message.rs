use lattice::V2;

// cursor positions and pan offsets are in screen pixels
pub enum ControllerMessage {
	BeginDrag(V2),
	DragTo(V2),
	EndDrag,
	CancelDrag,
	Reset,
	Pan(V2),
	SetScale(f64),
	SetNodeRadius(f64),
}
