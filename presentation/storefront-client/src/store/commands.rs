use super::cache::{QueryKey, StoreCache};
use super::notice::NoticeLevel;

/// A store mutation and its declared effect on the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCommand {
    pub name: &'static str,
    /// Entries dropped on success so the next read refetches.
    pub invalidates: &'static [QueryKey],
    /// Entry replaced by an empty collection on success.
    pub sets_empty: Option<QueryKey>,
    pub success_notice: Option<(NoticeLevel, &'static str)>,
    pub failure_message: &'static str,
    /// Shown when the command is attempted without a signed-in user.
    pub login_required: &'static str,
}

impl StoreCommand {
    pub async fn apply(&self, cache: &StoreCache) {
        for key in self.invalidates {
            cache.invalidate(*key).await;
        }
        if let Some(key) = self.sets_empty {
            cache.set_empty(key).await;
        }
    }
}

const CART_LOGIN: &str = "Faça login para acessar o carrinho";

pub const ADD_TO_CART: StoreCommand = StoreCommand {
    name: "add_to_cart",
    invalidates: &[QueryKey::Cart],
    sets_empty: None,
    success_notice: Some((NoticeLevel::Success, "Produto adicionado!")),
    failure_message: "Erro ao adicionar produto.",
    login_required: "Faça login para adicionar ao carrinho",
};

pub const REMOVE_FROM_CART: StoreCommand = StoreCommand {
    name: "remove_from_cart",
    invalidates: &[QueryKey::Cart],
    sets_empty: None,
    success_notice: Some((NoticeLevel::Info, "Produto removido.")),
    failure_message: "Erro ao remover produto.",
    login_required: CART_LOGIN,
};

pub const UPDATE_QUANTITY: StoreCommand = StoreCommand {
    name: "update_quantity",
    invalidates: &[QueryKey::Cart],
    sets_empty: None,
    success_notice: None,
    failure_message: "Erro ao atualizar quantidade.",
    login_required: CART_LOGIN,
};

pub const CLEAR_CART: StoreCommand = StoreCommand {
    name: "clear_cart",
    invalidates: &[],
    sets_empty: Some(QueryKey::Cart),
    success_notice: None,
    failure_message: "Erro ao limpar carrinho.",
    login_required: CART_LOGIN,
};

pub const TOGGLE_FAVORITE: StoreCommand = StoreCommand {
    name: "toggle_favorite",
    invalidates: &[QueryKey::Favorites],
    sets_empty: None,
    success_notice: None,
    failure_message: "Erro ao atualizar favoritos.",
    login_required: "Faça login para favoritar",
};

pub const CHECKOUT: StoreCommand = StoreCommand {
    name: "checkout",
    invalidates: &[QueryKey::Cart],
    sets_empty: None,
    success_notice: Some((NoticeLevel::Success, "Pedido realizado com sucesso!")),
    failure_message: "Erro ao finalizar pedido.",
    login_required: "Faça login para finalizar a compra",
};
