use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;

pub trait InstanceConditionalTest {
    /// The branch an instance follows, or `None` when the test cannot be
    /// evaluated on it.
    fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize>;
    fn max_branches(&self, header: &InstanceHeader) -> usize;
    /// Human readable condition for `branch`, e.g. `outlook = sunny`.
    fn describe_condition_for_branch(&self, branch: usize, header: &InstanceHeader) -> String;
}
