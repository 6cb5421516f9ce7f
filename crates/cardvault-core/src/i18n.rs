//! Message bundles keyed by (language, message id)
//!
//! Every user-visible string of the view layer is a [`MessageId`]; [`t`]
//! resolves it for a [`Language`]. Messages with arguments have their own
//! formatting helpers below.

use crate::error::VaultError;
use crate::preferences::Language;
use crate::types::{Price, Rarity};

macro_rules! messages {
    ($($id:ident => $ru:literal, $en:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageId {
            $($id),+
        }

        impl MessageId {
            pub const ALL: &'static [MessageId] = &[$(MessageId::$id),+];
        }

        /// Look up a message in the bundle for `lang`
        pub fn t(lang: Language, id: MessageId) -> &'static str {
            match (lang, id) {
                $(
                    (Language::Ru, MessageId::$id) => $ru,
                    (Language::En, MessageId::$id) => $en,
                )+
            }
        }
    };
}

messages! {
    AppTitle => "NFT Коллекция", "NFT Collection";

    NavHome => "Главная", "Home";
    NavNfts => "NFTs", "NFTs";
    NavMarketplace => "Рынок", "Marketplace";
    NavProfile => "Профиль", "Profile";
    NavSettings => "Настройки", "Settings";
    ViewingAs => "Вы вошли как", "Viewing as";

    CollectionTitle => "Коллекция карточек", "Card collection";
    CollectionSubtitle =>
        "Просмотрите коллекцию карточек, конвертируйте их в NFT и управляйте вашей коллекцией.",
        "Browse the card collection, convert cards into NFTs and manage your collection.";
    CollectionEmpty => "У вас нет обычных карточек", "You have no plain cards";
    ConvertToNft => "Превратить в NFT", "Convert to NFT";
    ConvertConfirmMessage =>
        "Вы уверены, что хотите превратить эту карточку в NFT? Этот процесс необратим.",
        "Are you sure you want to convert this card into an NFT? This cannot be undone.";
    Minting => "Создание NFT...", "Minting NFT...";
    Back => "Назад", "Back";

    NftsTitle => "Ваши NFT", "Your NFTs";
    NftsSubtitle =>
        "Управляйте вашей коллекцией NFT, продавайте, дарите или обменивайте их.",
        "Manage your NFT collection: sell, gift or trade them.";
    NftsEmptyTitle => "Нет NFT", "No NFTs";
    NftsEmptyMessage =>
        "У вас пока нет NFT. Вы можете превратить карточки в NFT на главной странице.",
        "You have no NFTs yet. You can convert cards into NFTs on the home page.";

    MarketTitle => "Рынок NFT", "NFT Marketplace";
    MarketSubtitle =>
        "Исследуйте доступные NFT, покупайте редкие карточки и расширяйте свою коллекцию.",
        "Explore available NFTs, buy rare cards and grow your collection.";
    MarketEmptyTitle => "Рынок пуст", "The marketplace is empty";
    MarketEmptyMessage =>
        "На данный момент на рынке нет NFT. Вы можете выставить свои NFT на продажу.",
        "There are no NFTs on the market right now. You can put your own NFTs up for sale.";

    RarityLabel => "Редкость:", "Rarity:";
    DescriptionLabel => "Описание", "Description";
    PriceLabel => "Цена:", "Price:";
    OwnerLabel => "Владелец:", "Owner:";

    Sell => "Продать", "Sell";
    Gift => "Подарить", "Gift";
    Trade => "Обменять", "Trade";
    RemoveFromSale => "Убрать с продажи", "Remove from sale";
    BuyConfirmTitle => "Подтверждение покупки", "Confirm purchase";
    ChooseGiftRecipient => "Выберите, кому подарить", "Choose who to gift to";
    ChooseTradeRecipient => "Выберите, с кем обменяться", "Choose who to trade with";
    SellTitle => "Выставить на продажу", "Put up for sale";
    SellPriceLabel => "Цена (FPI Bank)", "Price (FPI Bank)";
    InvalidPrice => "Введите положительную цену", "Enter a positive price";
    Cancel => "Отмена", "Cancel";
    ActionFailed => "Не удалось выполнить действие", "Action failed";
    Yes => "Да", "Yes";
    No => "Нет", "No";

    ProfileTabNfts => "Подарки/NFT", "Gifts/NFTs";
    ProfileTabCards => "Карточки", "Cards";
    ProfileNoNfts => "У вас нет подарков и NFT", "You have no gifts or NFTs";
    ProfileNoCards => "У вас нет обычных карточек", "You have no plain cards";
    IncomingOffers => "Предложения обмена", "Trade offers";
    NoIncomingOffers => "Нет входящих предложений", "No incoming offers";
    Accept => "Принять", "Accept";
    Decline => "Отклонить", "Decline";

    SettingsTitle => "Настройки", "Settings";
    SettingsSubtitle =>
        "Управляйте настройками вашего аккаунта и приложения",
        "Manage your account and application settings";
    SettingsLanguage => "Язык", "Language";
    SettingsTheme => "Тема", "Theme";
    ThemeDark => "Тёмная (по умолчанию)", "Dark (default)";
    ThemeLight => "Светлая", "Light";
    SettingsAccent => "Акцентный цвет", "Accent color";

    NotFoundTitle => "Страница не найдена", "Page not found";
    NotFoundMessage => "Такой страницы не существует.", "This page does not exist.";
    GoHome => "На главную", "Go home";

    RarityCommon => "Обычная", "Common";
    RarityUncommon => "Необычная", "Uncommon";
    RarityRare => "Редкая", "Rare";
    RarityEpic => "Эпическая", "Epic";
    RarityLegendary => "Легендарная", "Legendary";
}

/// Localized rarity name
pub fn rarity_name(lang: Language, rarity: Rarity) -> &'static str {
    let id = match rarity {
        Rarity::Common => MessageId::RarityCommon,
        Rarity::Uncommon => MessageId::RarityUncommon,
        Rarity::Rare => MessageId::RarityRare,
        Rarity::Epic => MessageId::RarityEpic,
        Rarity::Legendary => MessageId::RarityLegendary,
    };
    t(lang, id)
}

/// Label of the buy button on a listing
pub fn buy_for(lang: Language, price: Price) -> String {
    match lang {
        Language::Ru => format!("Купить за {} FPI Bank", price),
        Language::En => format!("Buy for {} FPI Bank", price),
    }
}

pub fn buy_confirm(lang: Language, name: &str, price: Price) -> String {
    match lang {
        Language::Ru => format!("Вы уверены, что хотите купить \"{}\" за {} FPI Bank?", name, price),
        Language::En => format!("Are you sure you want to buy \"{}\" for {} FPI Bank?", name, price),
    }
}

pub fn remove_from_sale_confirm(lang: Language, name: &str) -> String {
    match lang {
        Language::Ru => format!("Убрать \"{}\" с рынка?", name),
        Language::En => format!("Remove \"{}\" from the marketplace?", name),
    }
}

/// One line of the incoming offers list
pub fn trade_offer(lang: Language, from: &str, card: &str) -> String {
    match lang {
        Language::Ru => format!("{} предлагает вам \"{}\"", from, card),
        Language::En => format!("{} offers you \"{}\"", from, card),
    }
}

/// Feedback line for a rejected operation
pub fn action_failed(lang: Language, error: &VaultError) -> String {
    format!("{}: {}", t(lang, MessageId::ActionFailed), error)
}

pub fn price_amount(price: Price) -> String {
    format!("{} FPI Bank", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_message_has_both_languages() {
        for id in MessageId::ALL {
            for lang in Language::ALL {
                assert!(!t(*lang, *id).is_empty(), "{:?} missing for {:?}", id, lang);
            }
        }
    }

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(t(Language::Ru, MessageId::NavMarketplace), "Рынок");
        assert_eq!(t(Language::En, MessageId::NavMarketplace), "Marketplace");
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(rarity_name(Language::En, Rarity::Legendary), "Legendary");
        assert_eq!(rarity_name(Language::Ru, Rarity::Common), "Обычная");
    }

    #[test]
    fn test_formatted_messages() {
        let price = Price::new(0.05).unwrap();
        assert_eq!(buy_for(Language::En, price), "Buy for 0.05 FPI Bank");
        assert_eq!(buy_for(Language::Ru, price), "Купить за 0.05 FPI Bank");
        assert!(buy_confirm(Language::En, "Dragon", price).contains("\"Dragon\""));
        assert_eq!(price_amount(price), "0.05 FPI Bank");
    }

    #[test]
    fn test_action_failed_names_the_reason() {
        let error = VaultError::SelfTransfer("1".to_string());
        let line = action_failed(Language::Ru, &error);
        assert!(line.starts_with("Не удалось выполнить действие: "));
        assert!(line.ends_with(&error.to_string()));
    }
}
