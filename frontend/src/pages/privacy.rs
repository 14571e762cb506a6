use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const LEGAL_STYLE: &str = r#"
    .legal-content {
        min-height: 100vh;
        background: #0B0F19;
        padding: 8rem 2rem 4rem;
        color: #fff;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .legal-content h1 {
        font-size: 2rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin-bottom: 2.5rem;
    }
    .legal-content section {
        background: rgba(0, 0, 0, 0.2);
        border-radius: 12px;
        width: 100%;
        max-width: 720px;
        padding: 2rem;
        margin: 1rem auto;
    }
    .legal-content h2 {
        color: #7EB2FF;
        font-size: 1.3rem;
        margin-bottom: 1rem;
    }
    .legal-content p, .legal-content li {
        color: #9CA3AF;
        line-height: 1.6;
    }
    .legal-content ul {
        list-style-type: none;
        padding-left: 1.5rem;
    }
    .legal-content li {
        position: relative;
        margin-bottom: 0.5rem;
    }
    .legal-content li:before {
        content: "•";
        color: #3B82F6;
        position: absolute;
        left: -1.5rem;
    }
    .legal-links {
        margin-top: 2rem;
    }
    .legal-links a {
        color: #3B82F6;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .legal-links a:hover {
        color: #7EB2FF;
    }
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>{ LEGAL_STYLE }</style>
            <h1>{"Политика обработки персональных данных"}</h1>

            <section>
                <h2>{"1. Какие данные мы собираем"}</h2>
                <p>{"Через форму заявки на сайте мы получаем:"}</p>
                <ul>
                    <li>{"имя, чтобы обращаться к вам при звонке"}</li>
                    <li>{"номер телефона, чтобы связаться с вами"}</li>
                    <li>{"комментарий, если вы его оставили"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Зачем мы их обрабатываем"}</h2>
                <ul>
                    <li>{"чтобы перезвонить и ответить на ваш вопрос"}</li>
                    <li>{"чтобы записать вас на просмотр квартиры"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Хранение и защита"}</h2>
                <p>{"Данные передаются по защищённому соединению и доступны только менеджерам отдела продаж. Мы не передаём их третьим лицам."}</p>
            </section>

            <section>
                <h2>{"4. Ваши права"}</h2>
                <p>{"Вы можете в любой момент запросить сведения о своих данных, исправить их или попросить удалить, написав нам на privacy@astera.example."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Вернуться на главную"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content not-found">
            <style>{ LEGAL_STYLE }</style>
            <h1>{"Страница не найдена"}</h1>
            <p>{"Возможно, ссылка устарела или в адресе есть опечатка."}</p>
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Вернуться на главную"}</Link<Route>>
            </div>
        </div>
    }
}
