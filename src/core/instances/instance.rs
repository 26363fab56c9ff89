use crate::core::instance_header::InstanceHeader;

pub trait Instance {
    /// Domain index of the value stored in column `index`.
    fn value_at_index(&self, index: usize) -> Option<usize>;

    /// The value stored in column `index`, resolved through the header.
    fn nominal_value_at_index(&self, index: usize) -> Option<&str>;

    fn class_value(&self) -> Option<usize>;

    fn header(&self) -> &InstanceHeader;
}
