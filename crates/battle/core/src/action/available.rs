//! Actions a combatant can currently afford.

use crate::action::ActionCategory;
use crate::env::ActionOracle;
use crate::state::{ActionBook, Combatant};

/// Known actions filtered by current MP, per category.
///
/// Basic actions are always available and are not listed.
pub fn available_actions(combatant: &Combatant, actions: &dyn ActionOracle) -> ActionBook {
    let affordable = |category: ActionCategory| -> Vec<String> {
        combatant
            .actions
            .names(category)
            .iter()
            .filter(|name| actions.mp_cost(category, name) <= combatant.mp.current)
            .cloned()
            .collect()
    };

    ActionBook {
        abilities: affordable(ActionCategory::Ability),
        skills: affordable(ActionCategory::Skill),
        black_magic: affordable(ActionCategory::BlackMagic),
        white_magic: affordable(ActionCategory::WhiteMagic),
    }
}
