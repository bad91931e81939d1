//! Element lists of the default mockups.

use crate::{
    foundation::{color::Color, error::DiagmockResult},
    scene::{dsl::SceneBuilder, model::Scene},
};

const INK: Color = Color::rgb(0x33, 0x33, 0x33);
const MUTED: Color = Color::rgb(0x66, 0x66, 0x66);
const FAINT: Color = Color::rgb(0x99, 0x99, 0x99);
const LINK: Color = Color::rgb(0x2c, 0x7b, 0xe5);
const ALERT: Color = Color::rgb(0xff, 0x00, 0x00);

// Login content is laid out around the horizontal center of the 670px canvas.
const LOGIN_WIDE_X: u32 = 335 - 150;
const LOGIN_NARROW_X: u32 = 335 - 100;

pub(super) fn login() -> DiagmockResult<Scene> {
    SceneBuilder::new("Login - IA para Eletrônica Automotiva")
        .text(LOGIN_WIDE_X, 100, "Diagnóstico Inteligente Automotivo", INK)
        .text(LOGIN_NARROW_X, 150, "Acesso ao Sistema", MUTED)
        .text(LOGIN_WIDE_X, 200, "Usuário:", INK)
        .input(LOGIN_WIDE_X, 230, 300, "Digite seu nome de usuário")
        .text(LOGIN_WIDE_X, 290, "Senha:", INK)
        .input(LOGIN_WIDE_X, 320, 300, "Digite sua senha")
        .button(LOGIN_WIDE_X, 390, 300, "Entrar")
        .text(LOGIN_NARROW_X, 450, "Esqueceu sua senha?", LINK)
        .build()
}

pub(super) fn vehicle_selection() -> DiagmockResult<Scene> {
    SceneBuilder::new("Seleção de Veículo")
        .text(20, 80, "Selecione o Veículo", INK)
        .text(20, 120, "Marca:", MUTED)
        .input(20, 150, 300, "Selecione a marca")
        .text(350, 120, "Modelo:", MUTED)
        .input(350, 150, 300, "Selecione o modelo")
        .text(20, 210, "Ano:", MUTED)
        .input(20, 240, 300, "Selecione o ano")
        .text(350, 210, "Motor:", MUTED)
        .input(350, 240, 300, "Selecione o motor")
        .text(20, 300, "Ou insira o código do chassi:", MUTED)
        .input(20, 330, 630, "Digite o código do chassi")
        .button(530, 390, 120, "Continuar")
        .text(20, 390, "Veículos recentes:", INK)
        .card(
            20,
            430,
            200,
            100,
            "Fiat Uno 2019",
            "Motor 1.0 Fire\nÚltimo acesso: 25/05/2025",
        )
        .card(
            240,
            430,
            200,
            100,
            "VW Gol 2018",
            "Motor 1.6 MSI\nÚltimo acesso: 20/05/2025",
        )
        .card(
            460,
            430,
            200,
            100,
            "Toyota Corolla 2020",
            "Motor 2.0 Flex\nÚltimo acesso: 15/05/2025",
        )
        .build()
}

pub(super) fn diagnostic() -> DiagmockResult<Scene> {
    SceneBuilder::new("Diagnóstico Guiado")
        .text(20, 80, "Diagnóstico Guiado - VW Gol 2018 (Motor 1.6 MSI)", INK)
        .text(20, 120, "Problema relatado: Falha na partida", MUTED)
        .text(20, 160, "Passo 1 de 5: Verificação da bateria", INK)
        .text(
            20,
            200,
            "Realize a medição da tensão da bateria com o veículo desligado:",
            MUTED,
        )
        .input(20, 230, 200, "Digite a tensão (V)")
        .button(240, 230, 120, "Confirmar")
        .text(20, 280, "Histórico de verificações:", INK)
        .rect(20, 310, 630, 150)
        .text(
            30,
            320,
            "• Tensão da bateria: 12.3V (Dentro do esperado: 12.0V - 12.8V)",
            INK,
        )
        .text(30, 350, "• Teste de carga da bateria: Aprovado", INK)
        .text(30, 380, "• Verificação visual dos cabos: Sem oxidação", INK)
        .text(30, 410, "• Teste do motor de arranque: Pendente", FAINT)
        .text(20, 480, "Próxima verificação recomendada:", INK)
        .card(
            20,
            510,
            630,
            80,
            "Verificar tensão nos terminais do motor de arranque durante a tentativa de partida",
            "Conecte o multímetro aos terminais e peça para um auxiliar tentar dar a partida. Registre a tensão.",
        )
        .button(530, 610, 120, "Próximo Passo")
        .button(390, 610, 120, "Sugerir Solução")
        .build()
}

pub(super) fn results() -> DiagmockResult<Scene> {
    SceneBuilder::new("Resultados do Diagnóstico")
        .text(
            20,
            80,
            "Resultados do Diagnóstico - VW Gol 2018 (Motor 1.6 MSI)",
            INK,
        )
        .text(20, 120, "Problema identificado: Falha no relé de partida", LINK)
        .text(20, 160, "Resumo das verificações:", INK)
        .rect(20, 190, 630, 180)
        .text(30, 200, "• Tensão da bateria: 12.3V (Normal)", INK)
        .text(30, 230, "• Teste de carga da bateria: Aprovado", INK)
        .text(30, 260, "• Verificação visual dos cabos: Sem oxidação", INK)
        .text(
            30,
            290,
            "• Tensão nos terminais do motor de arranque: 0.3V (Abaixo do esperado: >10V)",
            ALERT,
        )
        .text(30, 320, "• Teste do relé de partida: Falha detectada", ALERT)
        .text(
            30,
            350,
            "• Verificação do chicote elétrico: Sem danos visíveis",
            INK,
        )
        .text(20, 390, "Solução recomendada:", INK)
        .card(
            20,
            420,
            630,
            100,
            "Substituição do relé de partida",
            "O relé de partida apresenta falha e não está enviando corrente suficiente ao motor de arranque.\nLocalização: Caixa de fusíveis principal, posição R7. Código da peça: 5U0 951 253 A",
        )
        .text(20, 540, "Esquema elétrico relacionado:", INK)
        .image(20, 570, 630, 200)
        .button(530, 790, 120, "Finalizar")
        .button(390, 790, 120, "Imprimir")
        .build()
}

pub(super) fn upload() -> DiagmockResult<Scene> {
    SceneBuilder::new("Upload/Captura de Imagem")
        .text(20, 80, "Interpretação Visual - VW Gol 2018", INK)
        .text(20, 120, "Selecione o tipo de imagem:", MUTED)
        .button(20, 150, 150, "Módulo ECU")
        .button(190, 150, 150, "Etiqueta")
        .button(360, 150, 150, "Componente")
        .button(530, 150, 150, "Esquema")
        .text(20, 210, "Envie ou capture a imagem:", INK)
        .rect(20, 240, 630, 300)
        .image(235, 290, 200, 200)
        .button(20, 560, 200, "Carregar Imagem")
        .button(240, 560, 200, "Usar Câmera")
        .button(460, 560, 190, "Analisar Imagem")
        .text(20, 610, "Dicas:", INK)
        .text(
            20,
            640,
            "• Certifique-se de que a imagem está bem iluminada e focada",
            MUTED,
        )
        .text(20, 670, "• Evite reflexos e sombras sobre o componente", MUTED)
        .text(
            20,
            700,
            "• Para etiquetas, aproxime o máximo possível mantendo a legibilidade",
            MUTED,
        )
        .build()
}

pub(super) fn recognition() -> DiagmockResult<Scene> {
    SceneBuilder::new("Reconhecimento de Componentes")
        .text(20, 80, "Reconhecimento de Componentes - Módulo ECU", INK)
        .text(20, 120, "Componentes identificados:", MUTED)
        .image(20, 150, 300, 300)
        .rect(340, 150, 310, 300)
        .text(350, 160, "Informações do Componente", INK)
        .text(350, 190, "Tipo: Módulo de Controle do Motor (ECU)", MUTED)
        .text(350, 220, "Fabricante: Bosch", MUTED)
        .text(350, 250, "Número de Série: 032 906 032 BF", MUTED)
        .text(350, 280, "Aplicação: VW Gol 1.6 MSI (2017-2019)", MUTED)
        .text(350, 310, "Compatibilidade: Original", MUTED)
        .text(350, 340, "Status: Componente identificado com sucesso", LINK)
        .button(350, 380, 300, "Ver Esquema Elétrico")
        .text(20, 470, "Histórico de diagnósticos deste componente:", INK)
        .card(
            20,
            500,
            300,
            80,
            "Falha P0120",
            "Sensor de posição do acelerador - Circuito aberto\nFrequência: Alta (23 casos registrados)",
        )
        .card(
            340,
            500,
            300,
            80,
            "Falha P0322",
            "Sensor de rotação - Sem sinal\nFrequência: Média (12 casos registrados)",
        )
        .card(
            20,
            600,
            300,
            80,
            "Falha P0505",
            "Sistema de controle de marcha lenta\nFrequência: Baixa (5 casos registrados)",
        )
        .card(
            340,
            600,
            300,
            80,
            "Falha P0130",
            "Sensor de oxigênio - Circuito defeituoso\nFrequência: Baixa (3 casos registrados)",
        )
        .button(530, 700, 120, "Exportar Dados")
        .build()
}

pub(super) fn schematic() -> DiagmockResult<Scene> {
    SceneBuilder::new("Esquema Elétrico")
        .text(20, 80, "Esquema Elétrico - Módulo ECU VW Gol 1.6 MSI", INK)
        .image(20, 120, 630, 400)
        .text(20, 540, "Legenda de Componentes:", INK)
        .text(20, 570, "1. Módulo ECU (032 906 032 BF)", MUTED)
        .text(20, 600, "2. Sensor de posição do acelerador (G79)", MUTED)
        .text(20, 630, "3. Sensor de rotação do motor (G28)", MUTED)
        .text(20, 660, "4. Sensor de oxigênio pré-catalisador (G39)", MUTED)
        .text(350, 570, "5. Válvula EGR (N18)", MUTED)
        .text(350, 600, "6. Bobina de ignição (N70)", MUTED)
        .text(350, 630, "7. Injetores de combustível (N30-N33)", MUTED)
        .text(350, 660, "8. Relé da bomba de combustível (J17)", MUTED)
        .button(20, 700, 150, "Ampliar")
        .button(190, 700, 150, "Imprimir")
        .button(360, 700, 150, "Salvar PDF")
        .button(530, 700, 120, "Voltar")
        .build()
}

pub(super) fn dashboard() -> DiagmockResult<Scene> {
    SceneBuilder::new("Dashboard Principal")
        .text(20, 80, "Dashboard - Visão Geral", INK)
        .card(
            20,
            120,
            200,
            100,
            "Diagnósticos Realizados",
            "Total: 157\nEste mês: 23\nHoje: 3",
        )
        .card(
            240,
            120,
            200,
            100,
            "Taxa de Sucesso",
            "Geral: 92%\nEste mês: 95%\nComponentes: 89%",
        )
        .card(
            460,
            120,
            200,
            100,
            "Tempo Médio",
            "Diagnóstico: 12 min\nInterpretação: 3 min\nTotal: 15 min",
        )
        .text(20, 240, "Diagnósticos Recentes:", INK)
        .rect(20, 270, 630, 150)
        .text(
            30,
            280,
            "Data       | Veículo           | Problema                  | Solução                  | Mecânico",
            INK,
        )
        .text(
            30,
            310,
            "28/05/2025 | VW Gol 2018      | Falha na partida          | Substituição de relé     | Carlos Silva",
            INK,
        )
        .text(
            30,
            340,
            "27/05/2025 | Fiat Uno 2019    | Luz de injeção acesa      | Sensor MAP substituído   | Maria Oliveira",
            INK,
        )
        .text(
            30,
            370,
            "27/05/2025 | Toyota Corolla 20| Consumo elevado           | Limpeza de bicos         | João Pereira",
            INK,
        )
        .text(
            30,
            400,
            "26/05/2025 | Honda Civic 2021 | Ar condicionado sem frio  | Recarga de gás           | Carlos Silva",
            INK,
        )
        .text(20, 440, "Problemas Mais Frequentes:", INK)
        .image(20, 470, 300, 200)
        .text(340, 440, "Componentes Mais Substituídos:", INK)
        .image(340, 470, 300, 200)
        .text(20, 690, "Base de Conhecimento:", INK)
        .button(200, 690, 150, "Acessar")
        .text(370, 690, "Relatórios:", INK)
        .button(470, 690, 180, "Gerar Relatório")
        .build()
}

pub(super) fn knowledge() -> DiagmockResult<Scene> {
    SceneBuilder::new("Base de Conhecimento")
        .text(20, 80, "Base de Conhecimento", INK)
        .text(20, 120, "Pesquisar:", MUTED)
        .input(
            100,
            120,
            450,
            "Digite o problema, componente ou modelo de veículo",
        )
        .button(570, 120, 80, "Buscar")
        .text(20, 170, "Filtrar por:", MUTED)
        .button(100, 170, 100, "Todos")
        .button(210, 170, 100, "Elétricos")
        .button(320, 170, 100, "Mecânicos")
        .button(430, 170, 100, "Sensores")
        .button(540, 170, 110, "Injeção")
        .text(20, 220, "Soluções Populares:", INK)
        .card(
            20,
            250,
            630,
            100,
            "Falha P0120 - Sensor de posição do acelerador",
            "Sintomas: Marcha lenta irregular, aceleração instável, luz de injeção acesa.\nSolução: Verificar conexões do sensor TPS, medir resistência (deve estar entre 0.5-4.5 kΩ), substituir se necessário.",
        )
        .card(
            20,
            370,
            630,
            100,
            "Falha na Partida - Relé de Partida",
            "Sintomas: Motor de arranque não gira, sem ruído de partida, luzes do painel funcionam normalmente.\nSolução: Testar tensão nos terminais do motor de arranque, verificar relé na caixa de fusíveis, substituir relé.",
        )
        .card(
            20,
            490,
            630,
            100,
            "Ar Condicionado sem Refrigeração",
            "Sintomas: Ventilador funciona mas ar não resfria, compressor não liga.\nSolução: Verificar pressão do gás, testar sensor de pressão, verificar relé do compressor e embreagem.",
        )
        .text(20, 610, "Contribuir com Conhecimento:", INK)
        .button(250, 610, 200, "Adicionar Nova Solução")
        .text(20, 660, "Estatísticas da Base:", MUTED)
        .text(
            20,
            690,
            "Total de soluções: 1.247 | Contribuições este mês: 37 | Soluções verificadas: 89%",
            MUTED,
        )
        .build()
}

/// English stand-in: subtitle, a large framed area and a preview caption.
pub(super) fn preview(title: &str, subtitle: &str) -> DiagmockResult<Scene> {
    SceneBuilder::new(title)
        .text(20, 90, subtitle, INK)
        .rect(20, 130, 630, 620)
        .text(40, 160, "English preview mockup", MUTED)
        .build()
}
