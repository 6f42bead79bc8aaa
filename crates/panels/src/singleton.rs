use lab_config::SingletonConfig;
use lab_core::{Message, Panel, PanelOutput, Result};
use lab_instance::{InstanceManager, InstanceSlot};
use std::rc::Rc;

/// Shows that every request to the instance slot hands back the same object.
///
/// - `CreateInstance`: asks twice with different identifiers and compares.
/// - `CheckInstance`: asks once per configured check identifier.
#[derive(Debug)]
pub struct SingletonPanel {
    slot:   Rc<InstanceSlot>,
    config: SingletonConfig,
}

impl SingletonPanel {
    pub fn new(slot: Rc<InstanceSlot>, config: SingletonConfig) -> Self {
        Self { slot, config }
    }

    fn create(&self) -> PanelOutput {
        let mut out = PanelOutput::new(self.title());

        let first = self.slot.get_or_init(&self.config.primary);
        out.success(format!("Created first instance: {}", first.identifier()));

        let second = self.slot.get_or_init(&self.config.secondary);
        out.text(format!(
            "Attempted to create second instance: {}",
            second.identifier()
        ));

        out.text(format!(
            "Instances are the same: {}",
            yes_no(Rc::ptr_eq(&first, &second))
        ));

        for (label, instance) in [("First", &first), ("Second", &second)] {
            out.text(format!("{label} instance message:"));
            out.text(format!("  {}", instance.message()));
            instance.display_message();
        }

        out
    }

    fn check(&self) -> PanelOutput {
        let mut out = PanelOutput::new(self.title());

        let instances: Vec<Rc<InstanceManager>> = self
            .config
            .checks
            .iter()
            .map(|id| self.slot.get_or_init(id))
            .collect();

        out.text(format!("Checking {} instances...", instances.len()));

        let all_same = instances.iter().all(|i| Rc::ptr_eq(i, &instances[0]));
        out.success(format!("All instances are identical: {}", yes_no(all_same)));

        for (index, instance) in instances.iter().enumerate() {
            out.text(format!(
                "Instance {}: {} (ID: {})",
                index + 1,
                instance.identifier(),
                instance.serial()
            ));
        }

        out
    }
}

impl Panel for SingletonPanel {
    fn id(&self) -> &str {
        "singleton"
    }

    fn title(&self) -> &str {
        "Singleton Pattern"
    }

    fn handle(&mut self, message: &Message) -> Result<Option<PanelOutput>> {
        Ok(match message {
            Message::CreateInstance => Some(self.create()),
            Message::CheckInstance  => Some(self.check()),
            _ => None,
        })
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::SequenceRequest;

    fn panel() -> (SingletonPanel, Rc<InstanceSlot>) {
        let slot = Rc::new(InstanceSlot::new());
        (SingletonPanel::new(Rc::clone(&slot), SingletonConfig::default()), slot)
    }

    #[test]
    fn create_reports_shared_instance() {
        let (mut panel, slot) = panel();
        let out = panel.handle(&Message::CreateInstance).unwrap().unwrap();

        assert!(out.contains("Created first instance: Primary Instance"));
        // The second request gets the first identifier back.
        assert!(out.contains("Attempted to create second instance: Primary Instance"));
        assert!(out.contains("Instances are the same: YES"));
        assert!(out.contains("Message from Primary Instance"));
        assert_eq!(slot.accesses(), 2);
    }

    #[test]
    fn check_lists_every_request() {
        let (mut panel, slot) = panel();
        let out = panel.handle(&Message::CheckInstance).unwrap().unwrap();
        let serial = slot.current().unwrap().serial();

        assert!(out.contains("Checking 3 instances..."));
        assert!(out.contains("All instances are identical: YES"));
        // The first check created the instance, so it carries that name.
        for n in 1..=3 {
            assert!(out.contains(&format!("Instance {n}: Check 1 (ID: {serial})")));
        }
    }

    #[test]
    fn check_after_create_keeps_primary() {
        let (mut panel, _slot) = panel();
        panel.handle(&Message::CreateInstance).unwrap();
        let out = panel.handle(&Message::CheckInstance).unwrap().unwrap();
        assert!(out.contains("Instance 1: Primary Instance"));
    }

    #[test]
    fn empty_check_list_is_vacuously_identical() {
        let slot = Rc::new(InstanceSlot::new());
        let config = SingletonConfig {
            checks: Vec::new(),
            ..SingletonConfig::default()
        };
        let mut panel = SingletonPanel::new(slot, config);
        let out = panel.handle(&Message::CheckInstance).unwrap().unwrap();
        assert!(out.contains("Checking 0 instances..."));
        assert!(out.contains("All instances are identical: YES"));
    }

    #[test]
    fn ignores_other_messages() {
        let (mut panel, slot) = panel();
        let result = panel
            .handle(&Message::GenerateSequence(SequenceRequest::default()))
            .unwrap();
        assert!(result.is_none());
        assert!(!slot.is_initialized());
    }
}
