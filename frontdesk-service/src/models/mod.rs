pub mod operation;
pub mod staff;
pub mod visitor;

pub use operation::OperationResult;
pub use staff::StaffMember;
pub use visitor::VisitorAnnouncement;
