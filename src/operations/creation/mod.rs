mod make_box;
mod make_cylinder;
mod make_face;
mod make_solid;
mod make_sphere;
mod make_wire;

pub use make_box::MakeBox;
pub use make_cylinder::MakeCylinder;
pub use make_face::MakeFace;
pub use make_solid::MakeSolid;
pub use make_sphere::MakeSphere;
pub use make_wire::MakeWire;
